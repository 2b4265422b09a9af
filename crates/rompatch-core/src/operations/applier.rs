use crate::error::PatchError;
use crate::types::Edit;

/// Apply a diff list to a ROM image, returning the patched copy.
///
/// The input slice is never written through; every edit lands in a fresh
/// buffer of the same length. Edits are applied in list order, so a later
/// edit wins wherever two overlap. Processing stops at the first edit whose
/// range falls outside the ROM.
pub fn apply_diff(rom: &[u8], edits: &[Edit]) -> Result<Vec<u8>, PatchError> {
    let mut out = rom.to_vec();

    for edit in edits {
        let pos = edit.pos.resolve()?;
        let len = edit.bytes.len();

        if pos < 0 || (pos as usize).saturating_add(len) > out.len() {
            return Err(PatchError::OutOfBounds {
                pos,
                len,
                rom_len: out.len(),
            });
        }

        let start = pos as usize;
        for (i, b) in edit.bytes.iter().enumerate() {
            out[start + i] = (b & 0xFF) as u8;
        }
    }

    Ok(out)
}
