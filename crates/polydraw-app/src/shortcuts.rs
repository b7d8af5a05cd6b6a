//! Mouse and keyboard controls, printed at start-up.

use polydraw_core::USAGE_EXAMPLES;

/// A control binding and what it does.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub input: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(input: &'static str, description: &'static str) -> Self {
        Self { input, description }
    }
}

/// Registry of all controls.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered controls.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Left click", "Select the topmost figure under the cursor"),
            Shortcut::new("Left drag", "Move the selected figure"),
            Shortcut::new("Mouse wheel", "Scale the selected figure"),
            Shortcut::new("Delete", "Remove the selected figure"),
        ]
    }

    /// Print controls and command examples to the console.
    pub fn print_all() {
        println!("\n=== Controls ===");
        for shortcut in Self::all() {
            println!("  {:14} {}", shortcut.input, shortcut.description);
        }
        println!("\n=== Commands ===");
        for example in USAGE_EXAMPLES {
            println!("  {example}");
        }
        println!("  quit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_controls() {
        let inputs: Vec<_> = ShortcutRegistry::all().iter().map(|s| s.input).collect();
        assert!(inputs.contains(&"Delete"));
        assert!(inputs.contains(&"Mouse wheel"));
    }
}
