//! Final script assembly.

use crate::registry::DefinitionRegistry;

/// Fixed header: fetch the active model, clear its entities, purge stale
/// definitions.
pub(crate) const HEADER: [&str; 3] = [
    "model = Sketchup.active_model",
    "model.entities.clear!",
    "model.definitions.purge_unused",
];

/// Concatenate header, definition blocks (first-registration order) and
/// body lines into the final newline-terminated script.
pub(crate) fn assemble(registry: &DefinitionRegistry, body: &[String]) -> String {
    let mut script = String::new();
    for line in HEADER {
        script.push_str(line);
        script.push('\n');
    }
    for block in registry.blocks() {
        script.push_str(block);
        script.push('\n');
    }
    for line in body {
        script.push_str(line);
        script.push('\n');
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let registry = DefinitionRegistry::new();
        assert_eq!(
            assemble(&registry, &[]),
            "model = Sketchup.active_model\n\
             model.entities.clear!\n\
             model.definitions.purge_unused\n"
        );
    }

    #[test]
    fn test_definitions_precede_body() {
        let mut registry = DefinitionRegistry::new();
        registry.register("k".into(), "D".into(), "definition block".into());
        let script = assemble(&registry, &["body line".into()]);
        let definition_at = script.find("definition block").unwrap();
        let body_at = script.find("body line").unwrap();
        assert!(definition_at < body_at);
        assert!(script.ends_with('\n'));
    }
}
