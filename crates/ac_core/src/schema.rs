//! Declarative schema metadata for the article model.
//!
//! The persistence backends and the admin layer both read this table instead
//! of hard-coding field names, labels or length limits.

/// Storage-level kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer primary key assigned by the store on insert.
    AutoId,
    /// Bounded text, `max_length` counted in characters.
    Char { max_length: usize },
    /// UTC timestamp.
    DateTime,
    /// Unbounded plain text.
    Text,
    /// Unbounded markdown text.
    Markdown,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    /// Human-readable label shown in the admin UI.
    pub verbose_name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    /// Populated by the store at insert time, never editable.
    pub auto_created: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ModelSchema {
    pub model: &'static str,
    pub table: &'static str,
    pub verbose_name: &'static str,
    pub fields: &'static [FieldDef],
}

impl ModelSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub const ARTICLE: ModelSchema = ModelSchema {
    model: "article",
    table: "articles",
    verbose_name: "文章",
    fields: &[
        FieldDef {
            name: "id",
            verbose_name: "ID",
            kind: FieldKind::AutoId,
            nullable: false,
            auto_created: true,
        },
        FieldDef {
            name: "title",
            verbose_name: "标题",
            kind: FieldKind::Char { max_length: 255 },
            nullable: false,
            auto_created: false,
        },
        FieldDef {
            name: "create_time",
            verbose_name: "创建时间",
            kind: FieldKind::DateTime,
            nullable: true,
            auto_created: true,
        },
        FieldDef {
            name: "description",
            verbose_name: "描述",
            kind: FieldKind::Text,
            nullable: true,
            auto_created: false,
        },
        FieldDef {
            name: "content",
            verbose_name: "content",
            kind: FieldKind::Markdown,
            nullable: false,
            auto_created: false,
        },
    ],
};

/// Maximum title length in characters, as declared in [`ARTICLE`].
pub fn title_max_length() -> usize {
    match ARTICLE.field("title").map(|f| f.kind) {
        Some(FieldKind::Char { max_length }) => max_length,
        _ => 255,
    }
}
