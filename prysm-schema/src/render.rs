//! Schema text generation.
//!
//! Rendering runs in two passes over a [`Schema`]:
//!
//! 1. **Uniqueness inference.** Every one-to-one relation whose backing
//!    field resolves marks that field unique. The result is kept in a
//!    [`RenderView`]; the stored schema is never modified, so rendering the
//!    same schema twice always yields the same text.
//! 2. **Emission.** Each model becomes a `model <Name> { ... }` block, with
//!    field lines first and relation lines after, both in declaration order.
//!
//! Relations whose backing field cannot be resolved degrade instead of
//! failing. Many-to-one lines are omitted and one-to-one lines switch to the
//! optional inverse shape. Each degradation is reported as a
//! [`RenderDiagnostic`].
//!
//! ```rust
//! use prysm_schema::{SchemaBuilder, ScalarType};
//!
//! let mut builder = SchemaBuilder::new();
//! builder.add_field("User", "id", ScalarType::Int, None, false);
//! builder.set_primary_key("User", "id").unwrap();
//!
//! let text = builder.generate_schema_text();
//! assert!(text.ends_with("model User {\n  id Int @id\n}"));
//! ```

use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::ast::{Field, Model, Relation, RelationKind, Schema};

/// Fixed datasource block that opens every document.
pub const DATASOURCE_PREAMBLE: &str = "datasource db {\n  provider = \"postgresql\"\n  url      = env(\"DATABASE_URL\")\n}\n\n";

/// Why a relation line was degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A many-to-one relation had no backing field and was left out.
    OmittedManyToOne,
    /// A one-to-one relation had no backing field and was rendered as the
    /// optional inverse side.
    OptionalOneToOne,
    /// An explicitly named backing field does not exist on the model.
    MissingExplicitBackingField,
}

/// A non-fatal note produced while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDiagnostic {
    /// Owning model.
    pub model: SmolStr,
    /// Relation name on the owning model.
    pub relation: SmolStr,
    /// What happened.
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for RenderDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::OmittedManyToOne => write!(
                f,
                "{}.{}: no backing field, many-to-one relation omitted",
                self.model, self.relation
            ),
            DiagnosticKind::OptionalOneToOne => write!(
                f,
                "{}.{}: no backing field, rendered as optional one-to-one",
                self.model, self.relation
            ),
            DiagnosticKind::MissingExplicitBackingField => write!(
                f,
                "{}.{}: explicit backing field does not exist",
                self.model, self.relation
            ),
        }
    }
}

/// Rendered document together with the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The schema document.
    pub text: String,
    /// Degraded relations, in emission order.
    pub diagnostics: Vec<RenderDiagnostic>,
}

/// Read-only rendering view of a schema with inferred uniqueness applied.
#[derive(Debug)]
pub struct RenderView<'a> {
    models: Vec<ModelView<'a>>,
}

#[derive(Debug)]
struct ModelView<'a> {
    model: &'a Model,
    /// Parallel to `model.fields`; `true` when a one-to-one relation is
    /// backed by that field.
    inferred_unique: Vec<bool>,
}

impl<'a> ModelView<'a> {
    fn new(model: &'a Model) -> Self {
        let mut inferred_unique = vec![false; model.fields.len()];
        for relation in &model.relations {
            if relation.kind != RelationKind::OneToOne {
                continue;
            }
            if let Some(index) = model.backing_field_index(relation) {
                inferred_unique[index] = true;
            }
        }
        Self {
            model,
            inferred_unique,
        }
    }

    fn is_unique(&self, index: usize) -> bool {
        self.model.fields[index].is_unique || self.inferred_unique[index]
    }
}

impl<'a> RenderView<'a> {
    /// Run the inference pass over `schema`.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            models: schema.models().map(ModelView::new).collect(),
        }
    }

    /// Emit the document.
    pub fn render(&self) -> Rendered {
        let mut output = String::from(DATASOURCE_PREAMBLE);
        let mut diagnostics = Vec::new();

        for view in &self.models {
            render_model(&mut output, &mut diagnostics, view);
        }

        debug!(
            models = self.models.len(),
            diagnostics = diagnostics.len(),
            "rendered schema"
        );

        Rendered {
            text: output.trim().to_string(),
            diagnostics,
        }
    }
}

/// Render a schema to text.
pub fn render_schema(schema: &Schema) -> String {
    RenderView::new(schema).render().text
}

/// Render a schema to text and collect diagnostics.
pub fn render_with_diagnostics(schema: &Schema) -> Rendered {
    RenderView::new(schema).render()
}

fn render_model(output: &mut String, diagnostics: &mut Vec<RenderDiagnostic>, view: &ModelView<'_>) {
    let model = view.model;
    output.push_str(&format!("model {} {{\n", model.name));

    for (index, field) in model.fields.iter().enumerate() {
        output.push_str(&field_line(field, view.is_unique(index)));
        output.push('\n');
    }

    for relation in &model.relations {
        if let Some(line) = relation_line(model, relation, diagnostics) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push_str("}\n\n");
}

/// A field line is the field's own `Display` form, plus `@unique` when the
/// view infers it. `@unique` is the last modifier, so appending keeps the
/// `@id @default @unique` order.
fn field_line(field: &Field, is_unique: bool) -> String {
    let mut line = format!("  {}", field);
    if is_unique && !field.is_unique {
        line.push_str(" @unique");
    }
    line
}

fn relation_line(
    model: &Model,
    relation: &Relation,
    diagnostics: &mut Vec<RenderDiagnostic>,
) -> Option<String> {
    let name = &relation.name;
    let related = &relation.related_model;

    match relation.kind {
        RelationKind::OneToMany => Some(format!("  {} {}[]", name, related)),
        RelationKind::ManyToMany => {
            let canonical = crate::ast::many_to_many_name(model.name(), related);
            Some(format!("  {} {}[] @relation(\"{}\")", name, related, canonical))
        }
        RelationKind::ManyToOne => match resolve_backing(model, relation, diagnostics) {
            Some(field) => Some(format!(
                "  {} {} @relation(fields: [{}], references: [id])",
                name, related, field.name
            )),
            None => {
                warn!(
                    model = %model.name,
                    relation = %name,
                    "many-to-one relation has no backing field, omitting"
                );
                diagnostics.push(diagnostic(model, relation, DiagnosticKind::OmittedManyToOne));
                None
            }
        },
        RelationKind::OneToOne => {
            let canonical = crate::ast::one_to_one_name(model.name(), related);
            match resolve_backing(model, relation, diagnostics) {
                Some(field) => Some(format!(
                    "  {} {} @relation(name: \"{}\", fields: [{}], references: [id])",
                    name, related, canonical, field.name
                )),
                None => {
                    debug!(
                        model = %model.name,
                        relation = %name,
                        "one-to-one relation has no backing field, rendering optional side"
                    );
                    diagnostics.push(diagnostic(model, relation, DiagnosticKind::OptionalOneToOne));
                    Some(format!(
                        "  {} {}? @relation(name: \"{}\")",
                        name, related, canonical
                    ))
                }
            }
        }
    }
}

fn resolve_backing<'m>(
    model: &'m Model,
    relation: &Relation,
    diagnostics: &mut Vec<RenderDiagnostic>,
) -> Option<&'m Field> {
    let field = model.backing_field_for(relation);
    if field.is_none() {
        if let Some(explicit) = &relation.backing_field {
            warn!(
                model = %model.name,
                relation = %relation.name,
                field = %explicit,
                "explicit backing field does not exist"
            );
            diagnostics.push(diagnostic(
                model,
                relation,
                DiagnosticKind::MissingExplicitBackingField,
            ));
        }
    }
    field
}

fn diagnostic(model: &Model, relation: &Relation, kind: DiagnosticKind) -> RenderDiagnostic {
    RenderDiagnostic {
        model: model.name.clone(),
        relation: relation.name.clone(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DefaultValue, ScalarType};
    use pretty_assertions::assert_eq;

    fn user_with_profile() -> Schema {
        let mut schema = Schema::new();
        let user = schema.model_entry("User");
        user.add_field(Field::new("id", ScalarType::Int).primary_key());
        user.add_field(Field::new("profileId", ScalarType::Int));
        user.add_relation(Relation::new("profile", RelationKind::OneToOne, "Profile"));

        let profile = schema.model_entry("Profile");
        profile.add_field(Field::new("id", ScalarType::Int).primary_key());
        profile.add_relation(Relation::new("user", RelationKind::OneToOne, "User"));
        schema
    }

    #[test]
    fn test_empty_schema_is_preamble_only() {
        let text = render_schema(&Schema::new());
        assert_eq!(text, DATASOURCE_PREAMBLE.trim());
    }

    #[test]
    fn test_field_line_modifier_order() {
        let field = Field::new("id", ScalarType::Int)
            .primary_key()
            .with_default(DefaultValue::ClientGeneratedId);
        assert_eq!(field_line(&field, true), "  id Int @id @default(cuid()) @unique");
    }

    #[test]
    fn test_field_line_declared_unique_not_repeated() {
        let field = Field::new("email", ScalarType::String).unique();
        assert_eq!(field_line(&field, true), "  email String @unique");
        assert_eq!(field_line(&field, true), format!("  {}", field));
    }

    #[test]
    fn test_field_line_plain() {
        let field = Field::new("createdAt", ScalarType::Date);
        assert_eq!(field_line(&field, false), "  createdAt DateTime");
    }

    #[test]
    fn test_inference_is_view_only() {
        let schema = user_with_profile();
        let text = RenderView::new(&schema).render().text;

        assert!(text.contains("  profileId Int @unique\n"));
        assert!(text.contains("  id Int @id\n"));

        let stored = schema.get_model("User").unwrap().get_field("profileId").unwrap();
        assert!(!stored.is_unique);
    }

    #[test]
    fn test_one_to_one_render() {
        let schema = user_with_profile();
        let rendered = render_with_diagnostics(&schema);

        insta::assert_snapshot!(rendered.text, @r#"
        datasource db {
          provider = "postgresql"
          url      = env("DATABASE_URL")
        }

        model User {
          id Int @id
          profileId Int @unique
          profile Profile @relation(name: "RelationBetweenProfileAndUser", fields: [profileId], references: [id])
        }

        model Profile {
          id Int @id
          user User? @relation(name: "RelationBetweenProfileAndUser")
        }
        "#);

        assert_eq!(
            rendered.diagnostics,
            vec![RenderDiagnostic {
                model: "Profile".into(),
                relation: "user".into(),
                kind: DiagnosticKind::OptionalOneToOne,
            }]
        );
    }

    #[test]
    fn test_many_to_one_without_backing_field_is_omitted() {
        let mut schema = Schema::new();
        let post = schema.model_entry("Post");
        post.add_field(Field::new("id", ScalarType::Int));
        post.add_relation(Relation::new("author", RelationKind::ManyToOne, "User"));

        let rendered = render_with_diagnostics(&schema);
        assert!(!rendered.text.contains("author"));
        assert_eq!(rendered.diagnostics.len(), 1);
        assert_eq!(rendered.diagnostics[0].kind, DiagnosticKind::OmittedManyToOne);
        assert_eq!(
            rendered.diagnostics[0].to_string(),
            "Post.author: no backing field, many-to-one relation omitted"
        );
    }

    #[test]
    fn test_explicit_backing_field() {
        let mut schema = Schema::new();
        let post = schema.model_entry("Post");
        post.add_field(Field::new("authorId", ScalarType::Int));
        post.add_field(Field::new("writer", ScalarType::Int));
        post.add_relation(
            Relation::new("author", RelationKind::ManyToOne, "User").with_backing_field("writer"),
        );

        let text = render_schema(&schema);
        assert!(text.contains("  author User @relation(fields: [writer], references: [id])"));
    }

    #[test]
    fn test_missing_explicit_backing_field_reports_twice() {
        let mut schema = Schema::new();
        let user = schema.model_entry("User");
        user.add_field(Field::new("profileId", ScalarType::Int));
        user.add_relation(
            Relation::new("profile", RelationKind::OneToOne, "Profile")
                .with_backing_field("profileRef"),
        );

        let rendered = render_with_diagnostics(&schema);
        // No fallback to inference: profileId stays non-unique.
        assert!(rendered.text.contains("  profileId Int\n"));
        assert!(rendered
            .text
            .contains("  profile Profile? @relation(name: \"RelationBetweenProfileAndUser\")"));
        let kinds: Vec<_> = rendered.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::MissingExplicitBackingField,
                DiagnosticKind::OptionalOneToOne
            ]
        );
    }

    #[test]
    fn test_unsupported_type_is_verbatim() {
        let mut schema = Schema::new();
        schema
            .model_entry("Blob")
            .add_field(Field::new("payload", "Bytes"));

        assert!(render_schema(&schema).contains("  payload Bytes"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let schema = user_with_profile();
        assert_eq!(render_schema(&schema), render_schema(&schema));
    }
}
