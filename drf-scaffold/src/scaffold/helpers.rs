//! Model name conventions
//!
//! Naming conventions shared by the path planner and the templates: file
//! stems, route segments and human-readable titles derived from model names.

use inflector::Inflector;

/// Naming helpers backing the artifact templates
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// File stem for a model's generated modules (plain lower case)
    ///
    /// # Examples
    ///
    /// ```
    /// # use drf_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_file_stem("Question"), "question");
    /// assert_eq!(TemplateHelpers::to_file_stem("UserProfile"), "userprofile");
    /// ```
    #[must_use]
    pub fn to_file_stem(model: &str) -> String {
        model.to_lowercase()
    }

    /// Plural form used for route prefixes
    ///
    /// Irregular nouns follow Inflector's rules (`Person` -> `People`).
    #[must_use]
    pub fn pluralize(word: &str) -> String {
        word.to_plural()
    }

    /// URL segment a model's viewset is registered under (kebab-case plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use drf_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_segment("Question"), "questions");
    /// assert_eq!(TemplateHelpers::to_route_segment("UserProfile"), "user-profiles");
    /// assert_eq!(TemplateHelpers::to_route_segment("Category"), "categories");
    /// ```
    #[must_use]
    pub fn to_route_segment(model: &str) -> String {
        Self::pluralize(&model.to_kebab_case())
    }

    /// Title used in generated docstrings
    ///
    /// # Examples
    ///
    /// ```
    /// # use drf_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_title("Question"), "Question");
    /// assert_eq!(TemplateHelpers::to_title("UserProfile"), "User Profile");
    /// ```
    #[must_use]
    pub fn to_title(model: &str) -> String {
        model.to_title_case()
    }

    /// Python list literal for serializer fields; `None` selects every field
    ///
    /// # Examples
    ///
    /// ```
    /// # use drf_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_fields_literal(None), "'__all__'");
    /// let fields = vec!["id".to_string(), "text".to_string()];
    /// assert_eq!(TemplateHelpers::to_fields_literal(Some(fields.as_slice())), "['id', 'text']");
    /// ```
    #[must_use]
    pub fn to_fields_literal(fields: Option<&[String]>) -> String {
        fields.map_or_else(
            || "'__all__'".to_string(),
            |fields| {
                let quoted: Vec<_> = fields
                    .iter()
                    .map(|f| format!("'{}'", f.replace('\\', "\\\\").replace('\'', "\\'")))
                    .collect();
                format!("[{}]", quoted.join(", "))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(TemplateHelpers::to_file_stem("Question"), "question");
        assert_eq!(TemplateHelpers::to_file_stem("HTTPRequest"), "httprequest");
    }

    #[test]
    fn test_plural_route_prefixes() {
        assert_eq!(TemplateHelpers::pluralize("question"), "questions");
        assert_eq!(TemplateHelpers::pluralize("category"), "categories");
        assert_eq!(TemplateHelpers::pluralize("user-profile"), "user-profiles");
    }

    #[test]
    fn test_route_segment() {
        assert_eq!(TemplateHelpers::to_route_segment("Question"), "questions");
        assert_eq!(TemplateHelpers::to_route_segment("UserProfile"), "user-profiles");
    }

    #[test]
    fn test_docstring_title() {
        assert_eq!(TemplateHelpers::to_title("BlogPostTag"), "Blog Post Tag");
    }

    #[test]
    fn test_fields_literal() {
        assert_eq!(TemplateHelpers::to_fields_literal(None), "'__all__'");
        assert_eq!(
            TemplateHelpers::to_fields_literal(Some(&["id".to_string()][..])),
            "['id']"
        );
        assert_eq!(TemplateHelpers::to_fields_literal(Some(&[][..])), "[]");
    }
}
