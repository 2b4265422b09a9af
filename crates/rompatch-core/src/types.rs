use crate::error::PatchError;
use serde::Deserialize;

/// One entry of a diff list: write `bytes` at `pos` in the original ROM.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edit {
    pub pos: Pos,
    pub bytes: Vec<i64>,
}

/// Byte offset of an edit. The diff generator emits hexadecimal strings;
/// hand-authored lists may use plain integers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Pos {
    Offset(i64),
    Hex(String),
}

impl Pos {
    /// Resolve to a signed offset. Negative values survive resolution and are
    /// rejected by the bounds check at apply time.
    pub fn resolve(&self) -> Result<i64, PatchError> {
        match self {
            Pos::Offset(n) => Ok(*n),
            Pos::Hex(s) => {
                let t = s.trim();
                let t = t
                    .strip_prefix("0x")
                    .or_else(|| t.strip_prefix("0X"))
                    .unwrap_or(t);
                i64::from_str_radix(t, 16).map_err(|_| PatchError::BadOffset(s.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_hex() {
        assert_eq!(Pos::Hex("02".to_string()).resolve().unwrap(), 2);
        assert_eq!(Pos::Hex("4eb6cc".to_string()).resolve().unwrap(), 0x004E_B6CC);
        assert_eq!(Pos::Hex("FF".to_string()).resolve().unwrap(), 255);
    }

    #[test]
    fn test_resolve_prefixed_hex() {
        assert_eq!(Pos::Hex("0x10".to_string()).resolve().unwrap(), 16);
        assert_eq!(Pos::Hex("0X10".to_string()).resolve().unwrap(), 16);
        assert_eq!(Pos::Hex("  0xe5b0 ".to_string()).resolve().unwrap(), 0xE5B0);
    }

    #[test]
    fn test_resolve_numeric() {
        assert_eq!(Pos::Offset(42).resolve().unwrap(), 42);
        assert_eq!(Pos::Offset(-1).resolve().unwrap(), -1);
    }

    #[test]
    fn test_resolve_negative_hex() {
        assert_eq!(Pos::Hex("-1".to_string()).resolve().unwrap(), -1);
    }

    #[test]
    fn test_resolve_malformed() {
        let err = Pos::Hex("zz".to_string()).resolve().unwrap_err();
        match err {
            PatchError::BadOffset(s) => assert_eq!(s, "zz"),
            other => panic!("expected BadOffset, got {:?}", other),
        }
        assert!(Pos::Hex("".to_string()).resolve().is_err());
        assert!(Pos::Hex("0x".to_string()).resolve().is_err());
    }
}
