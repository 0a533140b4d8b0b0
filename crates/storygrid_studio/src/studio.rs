//! The storyboard session and its generation operations.

use crate::{CompositeImage, OperationBoard, OperationKind, OperationState, StudioConfig, prompts};
use std::sync::{Mutex, MutexGuard, PoisonError};
use storygrid_core::{
    DataUrl, GenerateRequest, ImageConfig, Input, MediaSource, Message, SceneId, SceneRegistry,
    ScriptParser,
};
use storygrid_error::{
    BuilderError, BuilderErrorKind, StoryGridError, StoryGridResult, StudioError, StudioErrorKind,
};
use storygrid_interface::{GenerationDriver, extract_inline_image, extract_text};
use tracing::{debug, info, instrument, warn};

const REFINE_NEEDS_KEYWORD: &str =
    "Please enter a product keyword first to provide context for the refinement.";

/// Everything the user is working on.
#[derive(Debug, Default)]
struct Session {
    product_keyword: String,
    product_description: String,
    raw_script: String,
    registry: SceneRegistry,
    reference_image: Option<String>,
    composite: Option<CompositeImage>,
    error: Option<String>,
    operations: OperationBoard,
}

impl Session {
    /// Store a raw script and, unless it is empty, re-derive every scene.
    fn apply_script(&mut self, parser: &ScriptParser, script: String) {
        if !script.is_empty() {
            self.registry.replace_all(&parser.parse(&script));
        }
        self.raw_script = script;
    }

    fn fail(&mut self, kind: OperationKind, message: String) {
        self.operations.fail(kind, message.clone());
        self.error = Some(message);
    }
}

/// Drives one storyboard session against a generation backend.
///
/// The session state sits behind a mutex that is only held between awaits,
/// so a `Studio` can be shared (for instance in an `Arc`) and operations of
/// different categories can run at the same time. Starting an operation whose
/// category is already pending fails with [`StudioErrorKind::Busy`].
///
/// When two operations write the same scene, the one that finishes last wins.
///
/// # Example
///
/// ```no_run
/// use storygrid_models::GeminiClient;
/// use storygrid_studio::{Studio, StudioConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let studio = Studio::new(GeminiClient::new()?, &StudioConfig::load()?)?;
///
/// studio.set_product_keyword("Smart Watch");
/// studio.generate_script().await?;
/// let grid = studio.generate_composite().await?;
/// println!("{} bytes", grid.bytes().len());
/// # Ok(())
/// # }
/// ```
pub struct Studio<D: GenerationDriver> {
    driver: D,
    parser: ScriptParser,
    text_model: String,
    image_model: String,
    image_config: ImageConfig,
    session: Mutex<Session>,
}

impl<D: GenerationDriver> std::fmt::Debug for Studio<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("provider", &self.driver.provider_name())
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl<D: GenerationDriver> Studio<D> {
    /// Create a studio with an empty session.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the label lead-ins do not compile.
    #[instrument(skip_all, fields(provider = driver.provider_name()))]
    pub fn new(driver: D, config: &StudioConfig) -> StoryGridResult<Self> {
        Ok(Self {
            driver,
            parser: ScriptParser::new(&config.parser)?,
            text_model: config.models.text.clone(),
            image_model: config.models.image.clone(),
            image_config: config.image_config(),
            session: Mutex::new(Session::default()),
        })
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The backend this studio talks to.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The parser used for raw scripts.
    pub fn parser(&self) -> &ScriptParser {
        &self.parser
    }

    //
    // ─── SYNCHRONOUS CHANNELS ───────────────────────────────────────────────
    //

    /// Set the product name used by script generation and refinement.
    pub fn set_product_keyword(&self, keyword: impl Into<String>) {
        self.session().product_keyword = keyword.into();
    }

    /// Set the optional selling points.
    pub fn set_product_description(&self, description: impl Into<String>) {
        self.session().product_description = description.into();
    }

    /// Replace the raw script.
    ///
    /// A non-empty script is re-parsed and overwrites every scene
    /// description, including earlier direct edits. An empty script is
    /// stored but leaves the scenes alone.
    pub fn set_script(&self, script: impl Into<String>) {
        self.session().apply_script(&self.parser, script.into());
    }

    /// Edit one scene directly. The raw script is not touched.
    pub fn edit_scene(&self, id: SceneId, description: impl Into<String>) {
        self.session().registry.edit_description(id, description);
    }

    /// Attach a reference image as a `data:` URL (or bare base64).
    pub fn set_reference_image(&self, data_url: impl Into<String>) {
        self.session().reference_image = Some(data_url.into());
    }

    /// Drop the reference image.
    pub fn clear_reference_image(&self) {
        self.session().reference_image = None;
    }

    /// Dismiss the shared error message.
    pub fn clear_error(&self) {
        self.session().error = None;
    }

    //
    // ─── SNAPSHOTS ──────────────────────────────────────────────────────────
    //

    /// Current scenes.
    pub fn scenes(&self) -> SceneRegistry {
        self.session().registry.clone()
    }

    /// Current raw script.
    pub fn script(&self) -> String {
        self.session().raw_script.clone()
    }

    /// Current product keyword.
    pub fn product_keyword(&self) -> String {
        self.session().product_keyword.clone()
    }

    /// Current product description.
    pub fn product_description(&self) -> String {
        self.session().product_description.clone()
    }

    /// Current reference image.
    pub fn reference_image(&self) -> Option<String> {
        self.session().reference_image.clone()
    }

    /// Most recent storyboard grid.
    pub fn composite(&self) -> Option<CompositeImage> {
        self.session().composite.clone()
    }

    /// The shared error message, if any.
    pub fn error(&self) -> Option<String> {
        self.session().error.clone()
    }

    /// State of one operation category.
    pub fn operation_state(&self, kind: OperationKind) -> OperationState {
        self.session().operations.state(kind).clone()
    }

    //
    // ─── OPERATIONS ─────────────────────────────────────────────────────────
    //

    fn request(
        &self,
        model: &str,
        content: Vec<Input>,
        image_config: Option<ImageConfig>,
    ) -> StoryGridResult<GenerateRequest> {
        GenerateRequest::builder()
            .messages(vec![Message::user(content)])
            .model(Some(model.to_string()))
            .image_config(image_config)
            .build()
            .map_err(|e| {
                StoryGridError::from(BuilderError::new(BuilderErrorKind::ValidationFailed(
                    e.to_string(),
                )))
            })
    }

    /// Write a full script for the product keyword.
    ///
    /// On success the raw script becomes the response text and the scenes
    /// are re-derived from it.
    ///
    /// # Errors
    ///
    /// - [`StudioErrorKind::Busy`] if a script generation is pending
    /// - [`StudioErrorKind::MissingKeyword`] if the keyword is blank
    /// - the backend error, after recording it as the shared error
    #[instrument(skip(self))]
    pub async fn generate_script(&self) -> StoryGridResult<String> {
        let kind = OperationKind::ScriptGeneration;
        let request = {
            let mut session = self.session();
            session.operations.ensure_idle(kind)?;
            if session.product_keyword.trim().is_empty() {
                return Err(StudioError::new(StudioErrorKind::MissingKeyword).into());
            }
            let prompt =
                prompts::script_prompt(&session.product_keyword, &session.product_description);
            let request = self.request(&self.text_model, vec![Input::Text(prompt)], None)?;
            session.operations.begin(kind, None)?;
            session.error = None;
            request
        };

        debug!(model = %self.text_model, "Requesting script");
        let outcome = self.driver.generate(&request).await;

        let mut session = self.session();
        match outcome {
            Ok(response) => {
                let script = extract_text(&response);
                session.apply_script(&self.parser, script.clone());
                session.operations.succeed(kind);
                info!(chars = script.len(), "Script generated");
                Ok(script)
            }
            Err(e) => {
                warn!(error = %e, "Script generation failed");
                session.fail(kind, format!("Failed to generate AI script: {}", e.user_message()));
                Err(e)
            }
        }
    }

    /// Translate the raw script between Chinese and English.
    ///
    /// On success the raw script becomes the trimmed response text, which
    /// re-derives the scenes unless it is empty.
    ///
    /// # Errors
    ///
    /// - [`StudioErrorKind::Busy`] if a translation is pending
    /// - [`StudioErrorKind::EmptyScript`] if the raw script is blank
    /// - the backend error, after recording it as the shared error
    #[instrument(skip(self))]
    pub async fn translate_script(&self) -> StoryGridResult<String> {
        let kind = OperationKind::Translation;
        let request = {
            let mut session = self.session();
            session.operations.ensure_idle(kind)?;
            if session.raw_script.trim().is_empty() {
                return Err(StudioError::new(StudioErrorKind::EmptyScript).into());
            }
            let prompt = prompts::translation_prompt(&session.raw_script);
            let request = self.request(&self.text_model, vec![Input::Text(prompt)], None)?;
            session.operations.begin(kind, None)?;
            session.error = None;
            request
        };

        debug!(model = %self.text_model, "Requesting translation");
        let outcome = self.driver.generate(&request).await;

        let mut session = self.session();
        match outcome {
            Ok(response) => {
                let translated = extract_text(&response).trim().to_string();
                session.apply_script(&self.parser, translated.clone());
                session.operations.succeed(kind);
                info!(chars = translated.len(), "Script translated");
                Ok(translated)
            }
            Err(e) => {
                warn!(error = %e, "Translation failed");
                session.fail(kind, format!("Translation failed: {}", e.user_message()));
                Err(e)
            }
        }
    }

    /// Rewrite one scene's description.
    ///
    /// The scene is flagged as loading while the request is in flight. On
    /// success its description becomes the trimmed response text and its
    /// error is cleared; the raw script is left as it was.
    ///
    /// # Errors
    ///
    /// - [`StudioErrorKind::Busy`] if a refinement is pending
    /// - [`StudioErrorKind::MissingKeyword`] if the keyword is blank, which
    ///   also sets the shared error
    /// - the backend error, after recording it on the scene and as the
    ///   shared error
    #[instrument(skip(self))]
    pub async fn refine_scene(&self, id: SceneId) -> StoryGridResult<String> {
        let kind = OperationKind::Refinement;
        let request = {
            let mut session = self.session();
            session.operations.ensure_idle(kind)?;
            if session.product_keyword.trim().is_empty() {
                session.error = Some(REFINE_NEEDS_KEYWORD.to_string());
                return Err(StudioError::new(StudioErrorKind::MissingKeyword).into());
            }
            let prompt = prompts::refinement_prompt(
                id,
                &session.product_keyword,
                &session.product_description,
                session.registry.get(id).description(),
            );
            let request = self.request(&self.text_model, vec![Input::Text(prompt)], None)?;
            session.operations.begin(kind, Some(id))?;
            session.registry.scene_mut(id).set_loading(true);
            request
        };

        debug!(model = %self.text_model, scene = %id, "Requesting refinement");
        let outcome = self.driver.generate(&request).await;

        let mut session = self.session();
        session.registry.scene_mut(id).set_loading(false);
        match outcome {
            Ok(response) => {
                let refined = extract_text(&response).trim().to_string();
                let scene = session.registry.scene_mut(id);
                scene.set_description(refined.clone());
                scene.set_error(None);
                session.operations.succeed(kind);
                info!(scene = %id, chars = refined.len(), "Scene refined");
                Ok(refined)
            }
            Err(e) => {
                warn!(scene = %id, error = %e, "Refinement failed");
                let message = format!("Failed to refine {}: {}", id, e.user_message());
                session.registry.scene_mut(id).set_error(Some(message.clone()));
                session.fail(kind, message);
                Err(e)
            }
        }
    }

    /// Render all six scenes as one 3x2 storyboard grid.
    ///
    /// The reference image, when set, is sent along as an inline part.
    ///
    /// # Errors
    ///
    /// - [`StudioErrorKind::Busy`] if a composite is pending
    /// - [`StudioErrorKind::NoSceneDescriptions`] if every scene is empty,
    ///   which also sets the shared error
    /// - the backend error, or `NoImageData` if the response has no image,
    ///   after recording it as the shared error
    #[instrument(skip(self))]
    pub async fn generate_composite(&self) -> StoryGridResult<CompositeImage> {
        let kind = OperationKind::CompositeGeneration;
        let request = {
            let mut session = self.session();
            session.operations.ensure_idle(kind)?;
            if !session.registry.has_any_description() {
                let err = StudioError::new(StudioErrorKind::NoSceneDescriptions);
                session.error = Some(err.kind.to_string());
                return Err(err.into());
            }

            let mut content = vec![Input::Text(prompts::composite_prompt(&session.registry))];
            if let Some(reference) = &session.reference_image {
                let upload = DataUrl::lenient(reference);
                content.push(Input::Image {
                    mime: Some(upload.mime().to_string()),
                    source: MediaSource::Base64(upload.payload().to_string()),
                });
            }

            let request =
                self.request(&self.image_model, content, Some(self.image_config.clone()))?;
            session.operations.begin(kind, None)?;
            session.error = None;
            request
        };

        debug!(
            model = %self.image_model,
            aspect_ratio = %self.image_config.aspect_ratio,
            "Requesting storyboard grid"
        );
        let outcome = self
            .driver
            .generate(&request)
            .await
            .and_then(|response| extract_inline_image(&response));

        let mut session = self.session();
        match outcome {
            Ok(image) => {
                let composite = CompositeImage::from(image);
                session.composite = Some(composite.clone());
                session.operations.succeed(kind);
                info!(size = composite.bytes().len(), "Storyboard grid generated");
                Ok(composite)
            }
            Err(e) => {
                warn!(error = %e, "Storyboard generation failed");
                session.fail(kind, e.user_message());
                Err(e)
            }
        }
    }

    /// Run the last operation of a category again, with no delay.
    ///
    /// Refinement retries target the scene refined most recently.
    ///
    /// # Errors
    ///
    /// Whatever the repeated operation returns, or
    /// [`StudioErrorKind::NothingToRetry`] for a refinement retry before
    /// any refinement was attempted.
    #[instrument(skip(self))]
    pub async fn retry(&self, kind: OperationKind) -> StoryGridResult<()> {
        match kind {
            OperationKind::ScriptGeneration => self.generate_script().await.map(|_| ()),
            OperationKind::Translation => self.translate_script().await.map(|_| ()),
            OperationKind::Refinement => {
                let target = self.session().operations.last_refinement();
                match target {
                    Some(id) => self.refine_scene(id).await.map(|_| ()),
                    None => Err(StudioError::new(StudioErrorKind::NothingToRetry(
                        kind.to_string(),
                    ))
                    .into()),
                }
            }
            OperationKind::CompositeGeneration => self.generate_composite().await.map(|_| ()),
        }
    }
}
