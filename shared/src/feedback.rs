use crate::constants::ADDED_ITEM_PREFIX;

/// Text shown after the add-item form is submitted. The name is used as typed.
pub fn added_item_message(name: &str) -> String {
    format!("{}{}", ADDED_ITEM_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keeps_name_as_typed() {
        assert_eq!(added_item_message("Dark Reader"), "You added: Dark Reader");
        assert_eq!(added_item_message(" Dark Reader "), "You added:  Dark Reader ");
    }

    #[test]
    fn test_blank_name_still_gives_message() {
        assert_eq!(added_item_message(""), "You added: ");
        assert_eq!(added_item_message("   "), "You added:    ");
    }
}
