use crate::types::Edit;

/// Validate every edit against the ROM extent without writing anything.
///
/// Unlike `apply_diff`, this does not stop at the first violation: it
/// collects a failure string per bad edit so the caller can report all
/// problems at once and abort before touching any output.
pub fn run_preflight_checks(rom_len: usize, edits: &[Edit]) -> Result<(), Vec<String>> {
    println!("--- Running Preflight Checks ---");
    let mut errors = Vec::new();

    for (i, edit) in edits.iter().enumerate() {
        let prefix = format!("  - Edit #{}:", i + 1);

        let pos = match edit.pos.resolve() {
            Ok(pos) => pos,
            Err(e) => {
                errors.push(format!("{} FAILED ({})", prefix, e));
                continue;
            }
        };

        let len = edit.bytes.len();
        if pos < 0 || (pos as usize).saturating_add(len) > rom_len {
            errors.push(format!(
                "{} FAILED (out of bounds: pos={}, len={}, rom_len={})",
                prefix, pos, len, rom_len
            ));
        } else {
            println!("{} OK (0x{:x}, {} bytes)", prefix, pos, len);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    fn edit(pos: &str, bytes: Vec<i64>) -> Edit {
        Edit {
            pos: Pos::Hex(pos.to_string()),
            bytes,
        }
    }

    #[test]
    fn test_preflight_all_in_bounds() {
        let edits = [edit("00", vec![1]), edit("0e", vec![2, 3])];
        assert!(run_preflight_checks(16, &edits).is_ok());
    }

    #[test]
    fn test_preflight_empty_diff() {
        assert!(run_preflight_checks(16, &[]).is_ok());
    }

    #[test]
    fn test_preflight_out_of_bounds() {
        let edits = [edit("10", vec![1])];
        let errors = run_preflight_checks(16, &edits).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("out of bounds"));
        assert!(errors[0].contains("Edit #1"));
    }

    #[test]
    fn test_preflight_malformed_offset() {
        let edits = [edit("not-hex", vec![1])];
        let errors = run_preflight_checks(16, &edits).unwrap_err();
        assert!(errors[0].contains("not a hexadecimal integer"));
    }

    #[test]
    fn test_preflight_collects_all_failures() {
        let edits = [
            edit("00", vec![1]),
            edit("ff", vec![1]),
            edit("bogus", vec![1]),
            edit("-1", vec![1]),
        ];
        let errors = run_preflight_checks(16, &edits).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Edit #2"));
        assert!(errors[1].contains("Edit #3"));
        assert!(errors[2].contains("Edit #4"));
    }
}
