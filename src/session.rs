use crate::cup::Cup;
use crate::draw::{DrawResult, Drawer};
use crate::error::DrawError;
use crate::store::{save_draw, DrawStore};

const NO_SELECTION_TEXT: &str = "Bitte wähle zuerst einen Cup aus.";
const DRAW_FAILED_TEXT: &str = "Fehler: Auslosung fehlgeschlagen.";

/// Cup selection state owned by the selection screen.
///
/// Holds the chosen cup, runs the draw, and stores the record for the
/// slideshow. After a failure the session keeps its selection, so starting
/// again retries the draw.
#[derive(Clone, Debug, Default)]
pub struct DrawSession {
    selected: Option<Cup>,
    error: Option<String>,
}

impl DrawSession {
    pub fn new() -> Self {
        DrawSession::default()
    }

    /// Choose a cup. Clears any error shown for an earlier attempt.
    pub fn select(&mut self, cup: Cup) {
        self.selected = Some(cup);
        self.error = None;
    }

    /// Choose a cup by its internal name. An unknown name leaves the selection unchanged.
    pub fn select_named(&mut self, name: &str) -> Result<Cup, DrawError> {
        let cup = name.parse::<Cup>()?;
        self.select(cup);
        Ok(cup)
    }

    pub fn selected(&self) -> Option<Cup> {
        self.selected
    }

    /// Whether the start action is available.
    pub fn can_start(&self) -> bool {
        self.selected.is_some()
    }

    /// User-facing message for the last failed start, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Draw games for the selected cup and save the record under the draw key.
    pub fn start<S: DrawStore + ?Sized>(
        &mut self,
        drawer: &mut Drawer,
        store: &mut S,
    ) -> Result<DrawResult, DrawError> {
        let Some(cup) = self.selected else {
            self.error = Some(NO_SELECTION_TEXT.to_string());
            return Err(DrawError::NoCupSelected);
        };

        let outcome = drawer.draw(cup).and_then(|result| {
            save_draw(store, &result)?;
            Ok(result)
        });

        match outcome {
            Ok(result) => {
                self.error = None;
                tracing::info!(%cup, "draw stored");
                Ok(result)
            }
            Err(e) => {
                tracing::error!(%cup, %e, "draw or save failed");
                self.error = Some(DRAW_FAILED_TEXT.to_string());
                Err(e)
            }
        }
    }
}
