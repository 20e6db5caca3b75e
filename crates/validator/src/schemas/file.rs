//! File upload fields.
//!
//! A file-like candidate is a JSON object with `name` (string), `size`
//! (non-negative integer, bytes) and `type` (MIME type string).
//!
//! `maxFiles <= 1` builds a single-file schema that rejects arrays outright,
//! even one-element arrays. `maxFiles > 1` builds a multi-file schema that
//! expects an array, checks each element independently (issues carry the
//! element index as their first path segment) and bounds the count.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::combinators::{Collector, RuleChain};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssue, ValidationIssues};
use crate::format::format_file_size;
use crate::json::type_name;
use crate::message::{MessageOverrides, Rule};

/// 25 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// PDF, Word (doc/docx), JPEG and PNG.
pub const DEFAULT_ALLOWED_TYPES: [&str; 5] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for [`create_file_schema`].
///
/// | field | default |
/// |---|---|
/// | `required` | `true` |
/// | `maxSize` | [`DEFAULT_MAX_FILE_SIZE`] |
/// | `allowedTypes` | [`DEFAULT_ALLOWED_TYPES`] |
/// | `maxFiles` | `1` |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSchemaOptions {
    pub required: bool,
    pub max_size: u64,
    pub allowed_types: Vec<String>,
    pub max_files: usize,
    pub messages: MessageOverrides,
}

impl Default for FileSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            max_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| (*t).to_owned()).collect(),
            max_files: 1,
            messages: MessageOverrides::new(),
        }
    }
}

impl FileSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for FileSchemaOptions {
    const SCHEMA: &'static str = "file";
}

// ============================================================================
// FILE VALUES
// ============================================================================

/// Metadata of one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileInfo {
    /// Creates file metadata.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Reads a file-like object; `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use formfield_validator::schemas::file::FileInfo;
    /// use serde_json::json;
    ///
    /// let file = FileInfo::from_value(&json!({"name": "a.pdf", "size": 10, "type": "application/pdf"}));
    /// assert_eq!(file.unwrap().size, 10);
    /// assert!(FileInfo::from_value(&json!({"name": "a.pdf", "size": -1, "type": "application/pdf"})).is_none());
    /// assert!(FileInfo::from_value(&json!("a.pdf")).is_none());
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            name: object.get("name")?.as_str()?.to_owned(),
            size: object.get("size")?.as_u64()?,
            mime_type: object.get("type")?.as_str()?.to_owned(),
        })
    }
}

/// Accepted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileUpload {
    Single(FileInfo),
    Multiple(Vec<FileInfo>),
}

impl FileUpload {
    /// The selected files, in order.
    #[must_use]
    pub fn files(&self) -> &[FileInfo] {
        match self {
            FileUpload::Single(file) => std::slice::from_ref(file),
            FileUpload::Multiple(files) => files,
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Schema built by [`create_file_schema`].
#[derive(Debug, Clone)]
pub struct FileSchema {
    required: bool,
    max_files: usize,
    required_issue: ValidationIssue,
    invalid_type: ValidationIssue,
    invalid_file: ValidationIssue,
    single_file: ValidationIssue,
    too_many: ValidationIssue,
    type_message: String,
    rules: RuleChain<FileInfo>,
}

/// Builds a single- or multi-file schema depending on `maxFiles`.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
/// use formfield_validator::schemas::file::DEFAULT_MAX_FILE_SIZE;
/// use serde_json::json;
///
/// let schema = create_file_schema(FileSchemaOptions::default());
///
/// let pdf = json!({"name": "a.pdf", "size": DEFAULT_MAX_FILE_SIZE, "type": "application/pdf"});
/// assert!(schema.safe_check(&pdf).is_success());
///
/// let txt = json!({"name": "a.txt", "size": 10, "type": "text/plain"});
/// assert_eq!(schema.safe_check(&txt).errors().unwrap().first().code, "fileType");
///
/// assert!(schema.safe_check(&json!([pdf])).is_failure());
/// ```
#[must_use]
pub fn create_file_schema(options: FileSchemaOptions) -> FileSchema {
    tracing::trace!(?options, "building file schema");
    let messages = &options.messages;
    let max_size = options.max_size;
    let allowed = options.allowed_types.clone();
    let max_files = options.max_files;

    let size_message = messages.resolve(Rule::FileSize, || {
        Some(format!("File size must be less than {}", format_file_size(max_size)))
    });
    let type_message = messages.resolve(Rule::FileType, || {
        (!allowed.is_empty()).then(|| format!("File type must be one of: {}", allowed.join(", ")))
    });
    let rules = RuleChain::new()
        .refine(Rule::FileSize, size_message, move |file: &FileInfo| file.size <= max_size)
        .with_param("maxSize", max_size.to_string())
        .refine(Rule::FileType, type_message.clone(), move |file: &FileInfo| {
            allowed.iter().any(|t| *t == file.mime_type)
        });

    let issue = |rule: Rule, computed: Option<String>| {
        ValidationIssue::new(rule.as_str(), messages.resolve(rule, || computed))
    };

    FileSchema {
        required: options.required,
        max_files,
        required_issue: issue(Rule::Required, None),
        invalid_type: issue(Rule::InvalidType, None),
        invalid_file: issue(Rule::InvalidFile, None),
        single_file: issue(Rule::SingleFile, None),
        too_many: issue(Rule::MaxFiles, Some(format!("You may upload up to {max_files} files")))
            .with_param("maxFiles", max_files.to_string()),
        type_message,
        rules,
    }
}

impl FileSchema {
    /// Returns `true` for a multi-file schema.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.max_files > 1
    }

    fn absent(&self) -> Result<Option<FileUpload>, ValidationIssues> {
        if self.required {
            Err(self.required_issue.clone().into())
        } else {
            Ok(None)
        }
    }

    fn check_file(&self, value: &Value) -> Result<FileInfo, ValidationIssues> {
        let file = FileInfo::from_value(value).ok_or_else(|| {
            self.invalid_file
                .clone()
                .with_param("received", type_name(value))
        })?;
        self.rules.check(&file)?;
        Ok(file)
    }

    fn check_single(&self, input: &Value) -> Result<Option<FileUpload>, ValidationIssues> {
        match input {
            Value::Null => self.absent(),
            Value::Array(_) => Err(self.single_file.clone().into()),
            other => Ok(Some(FileUpload::Single(self.check_file(other)?))),
        }
    }

    fn check_multiple(&self, input: &Value) -> Result<Option<FileUpload>, ValidationIssues> {
        let items = match input {
            Value::Null => return self.absent(),
            Value::Array(items) if items.is_empty() => return self.absent(),
            Value::Array(items) => items,
            other => {
                return Err(self
                    .invalid_type
                    .clone()
                    .with_param("received", type_name(other))
                    .into());
            }
        };

        let mut collector = Collector::new();
        if items.len() > self.max_files {
            collector.push(self.too_many.clone());
        }
        let files: Vec<FileInfo> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| collector.field(index, self.check_file(item)))
            .collect();
        collector.finish(Some(FileUpload::Multiple(files)))
    }

    /// The resolved `fileType` message.
    #[must_use]
    pub fn file_type_message(&self) -> &str {
        &self.type_message
    }
}

impl FieldSchema for FileSchema {
    type Output = Option<FileUpload>;

    fn name(&self) -> &'static str {
        if self.is_multiple() { "files" } else { "file" }
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        if self.is_multiple() {
            self.check_multiple(input)
        } else {
            self.check_single(input)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn file(name: &str, size: u64, mime: &str) -> Value {
        json!({"name": name, "size": size, "type": mime})
    }

    fn pdf(size: u64) -> Value {
        file("report.pdf", size, "application/pdf")
    }

    fn codes(schema: &FileSchema, input: &Value) -> Vec<(String, String)> {
        match schema.check(input) {
            Ok(_) => Vec::new(),
            Err(issues) => issues
                .iter()
                .map(|i| (i.path_string(), i.code.to_string()))
                .collect(),
        }
    }

    mod single {
        use super::*;
        use pretty_assertions::assert_eq;

        fn schema() -> FileSchema {
            create_file_schema(FileSchemaOptions::default())
        }

        #[test]
        fn test_size_boundary() {
            assert!(schema().is_valid(&pdf(DEFAULT_MAX_FILE_SIZE)));
            let issues = schema().check(&pdf(DEFAULT_MAX_FILE_SIZE + 1)).unwrap_err();
            assert_eq!(issues.first().code, "fileSize");
            assert_eq!(issues.first().message, "File size must be less than 25 MB");
        }

        #[test]
        fn test_type_message_lists_allowed() {
            let schema = create_file_schema(
                FileSchemaOptions::default().allowed_types(["image/png", "image/gif"]),
            );
            let issues = schema.check(&pdf(10)).unwrap_err();
            assert_eq!(issues.first().message, "File type must be one of: image/png, image/gif");
            assert_eq!(schema.file_type_message(), "File type must be one of: image/png, image/gif");
        }

        #[test]
        fn test_size_and_type_both_reported() {
            let big_text = file("notes.txt", DEFAULT_MAX_FILE_SIZE * 2, "text/plain");
            let issues = schema().check(&big_text).unwrap_err();
            assert_eq!(issues.len(), 2);
        }

        #[test]
        fn test_rejects_array_even_with_one_element() {
            assert_eq!(codes(&schema(), &json!([pdf(1)])), vec![(String::new(), "singleFile".to_owned())]);
        }

        #[test]
        fn test_not_file_like() {
            assert_eq!(codes(&schema(), &json!("report.pdf")), vec![(String::new(), "invalidFile".to_owned())]);
            assert_eq!(codes(&schema(), &json!({"name": "x"})), vec![(String::new(), "invalidFile".to_owned())]);
        }

        #[test]
        fn test_presence() {
            assert_eq!(codes(&schema(), &json!(null)), vec![(String::new(), "required".to_owned())]);
            let optional = create_file_schema(FileSchemaOptions::default().required(false));
            assert_eq!(optional.check(&json!(null)), Ok(None));
        }

        #[test]
        fn test_output() {
            let out = schema().check(&pdf(3)).unwrap().unwrap();
            assert_eq!(out.files(), &[FileInfo::new("report.pdf", 3, "application/pdf")]);
            assert_eq!(schema().name(), "file");
        }
    }

    mod multiple {
        use super::*;
        use pretty_assertions::assert_eq;

        fn schema(required: bool) -> FileSchema {
            create_file_schema(FileSchemaOptions::default().max_files(3).required(required))
        }

        #[test]
        fn test_accepts_up_to_max() {
            let input = json!([pdf(1), file("b.png", 2, "image/png"), file("c.jpg", 3, "image/jpeg")]);
            let out = schema(true).check(&input).unwrap().unwrap();
            assert_eq!(out.files().len(), 3);
            assert!(schema(true).is_multiple());
        }

        #[test]
        fn test_too_many() {
            let input = json!([pdf(1), pdf(2), pdf(3), pdf(4)]);
            let result = schema(true).safe_check(&input);
            assert_eq!(result.first_message(), Some("You may upload up to 3 files"));
        }

        #[test]
        fn test_element_paths() {
            let input = json!([pdf(1), file("x.exe", 1, "application/x-msdownload"), "nope"]);
            assert_eq!(
                codes(&schema(true), &input),
                vec![
                    ("1".to_owned(), "fileType".to_owned()),
                    ("2".to_owned(), "invalidFile".to_owned()),
                ]
            );
        }

        #[test]
        fn test_empty_list() {
            assert_eq!(codes(&schema(true), &json!([])), vec![(String::new(), "required".to_owned())]);
            assert_eq!(schema(false).check(&json!([])), Ok(None));
            assert_eq!(schema(false).check(&json!(null)), Ok(None));
        }

        #[test]
        fn test_single_object_rejected() {
            assert_eq!(codes(&schema(true), &pdf(1)), vec![(String::new(), "invalidType".to_owned())]);
        }
    }

    #[test]
    fn test_options_from_json() {
        let options = FileSchemaOptions::from_json(&json!({
            "maxSize": 1024, "allowedTypes": ["text/csv"], "maxFiles": 5
        }))
        .unwrap();
        assert_eq!(options.max_size, 1024);
        assert_eq!(options.allowed_types, vec!["text/csv".to_owned()]);
        assert_eq!(options.max_files, 5);
        assert!(create_file_schema(options).is_multiple());
    }
}
