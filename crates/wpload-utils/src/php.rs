/// Export a string as a single-quoted PHP literal, the way `var_export` does.
#[must_use]
pub fn export_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(export_string("src"), "'src'");
    }

    #[test]
    fn test_namespace_backslashes() {
        assert_eq!(export_string(r"Acme\Lib\"), r"'Acme\\Lib\\'");
    }

    #[test]
    fn test_single_quote() {
        assert_eq!(export_string("it's"), r"'it\'s'");
    }
}
