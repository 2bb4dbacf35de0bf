use crate::{
    config::BuilderConfig,
    data::schema::FormSchema,
    preview::{PreviewError, PreviewForm, Submission},
};

/// Application state held as Cursive user data.
#[derive(Debug, Clone)]
pub struct AppData {
    /// The form being built.
    pub schema: FormSchema,
    /// Builder settings.
    pub config: BuilderConfig,
    /// Open preview, `None` while editing.
    pub preview: Option<PreviewForm>,
    /// Last successful preview submission.
    pub last_submission: Option<Submission>,
}

impl AppData {
    /// Start with an empty form named after the configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            schema: FormSchema::from_config(&config),
            config,
            preview: None,
            last_submission: None,
        }
    }

    pub fn showing_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Open the preview from the current schema, or close it when open.
    ///
    /// Returns whether the preview is open afterwards.
    pub fn toggle_preview(&mut self) -> Result<bool, PreviewError> {
        if self.preview.take().is_some() {
            return Ok(false);
        }
        self.preview = Some(PreviewForm::build(&self.schema, &self.config)?);
        Ok(true)
    }

    /// Status line shown under the builder.
    pub fn status_line(&self) -> String {
        let target = match self.schema.selected_section() {
            Some(section) => format!("adding to '{}'", section.name),
            None => "no section selected".to_string(),
        };
        format!(
            "{} section(s) | {target} | Enter edit  d delete  o option  c child field  s submit child  t pattern  i input type | p preview  q quit",
            self.schema.sections.len()
        )
    }
}
