//! Shared fixture catalog for unit tests

use crate::artifacts::MemoryResolver;
use crate::catalog::{Catalog, CatalogDocument};

pub const FIXTURE_CATALOG: &str = r#"
apiVersion: compendium.dev/v1
kind: ComponentCatalog
components:
  - name: Button
    category: atom
    description: Clickable control that triggers an action
    locationPath: src/components/ui/button.tsx
    schemaRef: schemas/button.json
    docRef: docs/button.md
    tags: [interactive, form, action]
    complexity: simple
    dependencies:
      internal: [cn]
      external: ["@radix-ui/react-slot", class-variance-authority]
    accessibilityLevel: AA
    version: 1.2.0
    hasTests: true
    hasStorybookEntry: true
    migrationState: integrated
  - name: Input
    category: atom
    description: Single-line text field
    locationPath: src/components/ui/input.tsx
    schemaRef: schemas/input.json
    docRef: pending
    tags: [form, text-entry]
    complexity: simple
    accessibilityLevel: AA
    version: 1.0.0
    hasTests: true
    migrationState: integrated
  - name: Badge
    category: atom
    description: Small status label
    locationPath: src/components/ui/badge.tsx
    schemaRef: pending
    docRef: docs/badge.md
    tags: [status, display]
    complexity: simple
    accessibilityLevel: A
    version: 0.3.1
    migrationState: documented
  - name: Card
    category: molecule
    description: Container with header, content and footer
    locationPath: src/components/ui/card.tsx
    tags: [layout, display, container]
    complexity: moderate
    dependencies:
      components: [Button]
    accessibilityLevel: AA
    version: 1.0.0
    hasTests: true
    migrationState: integrated
  - name: FormField
    category: molecule
    description: Input paired with a label and an error message
    locationPath: src/components/forms/form-field.tsx
    schemaRef: schemas/form-field.yaml
    docRef: docs/form-field.md
    tags: [form, validation]
    complexity: moderate
    dependencies:
      components: [Input, Label]
    accessibilityLevel: AA
    version: 0.9.0
    migrationState: pending
  - name: DataTable
    category: organism
    description: Sortable table with form filters and paging
    locationPath: src/components/data/data-table.tsx
    schemaRef: schemas/data-table.json
    tags: [data, table, display]
    complexity: complex
    dependencies:
      components: [Button, Input, Pagination]
      external: ["@tanstack/react-table"]
    accessibilityLevel: AA
    version: 2.0.0
    hasTests: true
    migrationState: integrated
  - name: Dialog
    category: organism
    description: Modal window layered over the page
    locationPath: src/components/ui/dialog.tsx
    docRef: docs/dialog.md
    tags: [overlay, interactive]
    complexity: moderate
    accessibilityLevel: AAA
    version: 1.1.0
    migrationState: integrated
  - name: DashboardShell
    category: template
    description: Page frame with sidebar navigation
    locationPath: src/components/layout/dashboard-shell.tsx
    tags: [layout]
    complexity: complex
    accessibilityLevel: AA
    version: 0.1.0
    migrationState: documented
  - name: EmptyState
    category: pattern
    description: Placeholder shown when there is no data
    locationPath: src/components/patterns/empty-state.tsx
    tags: [status, feedback]
    complexity: simple
    accessibilityLevel: A
    version: 0.1.0
    migrationState: documented
"#;

pub const BUTTON_SCHEMA: &str = r#"{
  "name": "Button",
  "props": {
    "variant": { "type": "enum", "values": ["default", "destructive"], "default": "default" },
    "size": { "type": "enum", "values": ["sm", "md", "lg"] },
    "disabled": { "type": "boolean" },
    "asChild": { "type": "boolean" }
  }
}"#;

pub const INPUT_SCHEMA: &str = r#"{
  "name": "Input",
  "props": {
    "name": { "type": "string", "required": true },
    "placeholder": { "type": "string" },
    "maxLength": { "type": "number" }
  }
}"#;

pub const FORM_FIELD_SCHEMA: &str = r#"
name: FormField
props:
  label:
    type: string
    required: true
  orientation:
    type: enum
    values: [vertical, horizontal]
"#;

pub const BUTTON_DOCS: &str = "# Button\n\nUse for primary actions.\n";

/// Fixture catalog with an in-memory resolver.
///
/// DataTable and FormField docs are referenced but deliberately missing from
/// the resolver.
pub fn fixture_catalog() -> Catalog {
    let document = CatalogDocument::from_yaml(FIXTURE_CATALOG).expect("fixture parses");
    let resolver = MemoryResolver::new()
        .with_schema("Button", BUTTON_SCHEMA)
        .with_schema("Input", INPUT_SCHEMA)
        .with_schema("FormField", FORM_FIELD_SCHEMA)
        .with_documentation("Button", BUTTON_DOCS)
        .with_documentation("Badge", "# Badge\n")
        .with_documentation("Dialog", "# Dialog\n");

    Catalog::from_document(document)
        .expect("fixture is consistent")
        .with_resolver(resolver)
}

/// Names of a record list, for compact assertions
pub fn names<'a>(records: impl IntoIterator<Item = &'a crate::catalog::ComponentRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.name.as_str()).collect()
}
