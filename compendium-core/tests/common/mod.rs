//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const SCENARIO_CATALOG: &str = r#"
apiVersion: compendium.dev/v1
kind: ComponentCatalog
components:
  - name: Button
    category: atom
    description: Clickable control that triggers an action
    locationPath: src/components/ui/button.tsx
    schemaRef: schemas/button.json
    docRef: docs/button.md
    tags: [interactive, form]
    complexity: simple
    accessibilityLevel: AA
    version: 1.0.0
    hasTests: true
    migrationState: integrated
  - name: Tooltip
    category: molecule
    description: Floating hint shown on hover
    locationPath: src/components/ui/tooltip.tsx
    schemaRef: pending
    docRef: pending
    tags: [overlay]
    complexity: moderate
    dependencies:
      components: [Button, Popover]
    accessibilityLevel: AA
    version: 0.4.0
    migrationState: documented
"#;

pub const SCENARIO_BUTTON_SCHEMA: &str = r#"{
  "name": "Button",
  "props": {
    "variant": { "type": "enum", "values": ["default", "destructive"] },
    "disabled": { "type": "boolean" }
  }
}"#;

/// Lay out a registry directory: config, catalog, one schema, one doc
pub fn write_registry(root: &Path) -> Result<()> {
    let registry = root.join("registry");
    fs::create_dir_all(registry.join("schemas"))?;
    fs::create_dir_all(registry.join("docs"))?;

    fs::write(registry.join("catalog.yaml"), SCENARIO_CATALOG)?;
    fs::write(registry.join("schemas/button.json"), SCENARIO_BUTTON_SCHEMA)?;
    fs::write(registry.join("docs/button.md"), "# Button\n\nPrimary actions.\n")?;

    fs::write(
        root.join("compendium.yaml"),
        "catalog: registry/catalog.yaml\nartifactRoot: registry\n",
    )?;

    Ok(())
}
