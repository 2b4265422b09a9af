use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("patch out of bounds: pos={}, len={len}, rom_len={rom_len}", fmt_pos(.pos))]
    OutOfBounds {
        pos: i64,
        len: usize,
        rom_len: usize,
    },

    #[error("invalid patch offset {0:?}: not a hexadecimal integer")]
    BadOffset(String),

    #[error("malformed diff list: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn fmt_pos(pos: &i64) -> String {
    if *pos < 0 {
        format!("-0x{:x}", pos.unsigned_abs())
    } else {
        format!("0x{:x}", pos)
    }
}
