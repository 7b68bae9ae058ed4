/// Snapshot of the editor state the floating toolbar cares about.
#[derive(Debug, Clone)]
pub struct SelectionState<'a> {
    pub from: usize,
    pub to: usize,
    /// Text between `from` and `to` as reported by the editor document.
    pub text: &'a str,
    pub active_block: BlockKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    CodeBlock,
    Other,
}

pub const MIN_SELECTION_CHARS: usize = 2;

pub fn should_show_bubble_menu(sel: &SelectionState<'_>) -> bool {
    if sel.from == sel.to || sel.text.is_empty() {
        return false;
    }
    if sel.text.chars().count() < MIN_SELECTION_CHARS {
        return false;
    }
    sel.active_block != BlockKind::CodeBlock
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(text: &str, block: BlockKind) -> SelectionState<'_> {
        SelectionState {
            from: 10,
            to: 10 + text.len(),
            text,
            active_block: block,
        }
    }

    #[test]
    fn hidden_for_single_character() {
        assert!(!should_show_bubble_menu(&sel("a", BlockKind::Paragraph)));
    }

    #[test]
    fn shown_for_two_or_more_outside_code() {
        assert!(should_show_bubble_menu(&sel("ab", BlockKind::Paragraph)));
        assert!(should_show_bubble_menu(&sel("a longer run", BlockKind::Heading)));
    }

    #[test]
    fn hidden_inside_code_block() {
        assert!(!should_show_bubble_menu(&sel("fn main()", BlockKind::CodeBlock)));
    }

    #[test]
    fn hidden_for_collapsed_selection() {
        let s = SelectionState {
            from: 4,
            to: 4,
            text: "",
            active_block: BlockKind::Paragraph,
        };
        assert!(!should_show_bubble_menu(&s));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(!should_show_bubble_menu(&sel("é", BlockKind::Paragraph)));
    }
}
