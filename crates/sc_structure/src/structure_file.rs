//! Locate the dot-bracket line in structure files.
//!
//! Folding tools write a title, the sequence and the structure with an
//! energy annotation, e.g. `((...)). (-1.20)`. We take the first token that
//! is made of structure symbols only.
//!

use crate::StructureError;

fn is_structure_symbol(c: char) -> bool {
    matches!(c, '.' | '(' | ')' | '[' | ']' | '-')
}

/// Returns the first dot-bracket token in `text`.
pub fn find_dotbracket(text: &str) -> Result<&str, StructureError> {
    text.lines()
        .filter(|line| !line.starts_with('>'))
        .filter_map(|line| line.split_whitespace().next())
        .find(|token| token.chars().all(is_structure_symbol))
        .ok_or(StructureError::NoStructure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(find_dotbracket("((..))\n").unwrap(), "((..))");
    }

    #[test]
    fn test_fold_output() {
        let text = ">fragment_a\nGGGAAACCC\n(((...))) (-1.20)\n";
        assert_eq!(find_dotbracket(text).unwrap(), "(((...)))");
    }

    #[test]
    fn test_missing_structure() {
        assert_eq!(find_dotbracket(">x\nACGU\n"), Err(StructureError::NoStructure));
        assert_eq!(find_dotbracket(""), Err(StructureError::NoStructure));
    }
}
