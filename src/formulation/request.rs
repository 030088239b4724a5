use crate::error::FormulationError;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// A validated request to formulate a ration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulationRequest {
    selected: Vec<String>,
    stage: Stage,
    herd_size: u32,
}

impl FormulationRequest {
    /// Validates the selection and herd size.
    ///
    /// An empty selection is reported as a missing ingredient list.
    pub fn new<I, S>(selected: I, stage: Stage, herd_size: u32) -> Result<Self, FormulationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: Vec<String> = selected.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            return Err(FormulationError::MissingField("ingredients"));
        }
        if herd_size == 0 {
            return Err(FormulationError::InvalidHerdSize(0));
        }
        Ok(Self {
            selected,
            stage,
            herd_size,
        })
    }

    /// Narrows a herd size from a loosely-typed source.
    ///
    /// Zero and negative values are `InvalidHerdSize`; values past `u32::MAX`
    /// are `HerdSizeOutOfRange`.
    pub fn checked_herd_size(value: i64) -> Result<u32, FormulationError> {
        if value <= 0 {
            return Err(FormulationError::InvalidHerdSize(value));
        }
        u32::try_from(value).map_err(|_| FormulationError::HerdSizeOutOfRange(value))
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn herd_size(&self) -> u32 {
        self.herd_size
    }
}

/// Loosely-typed request as it arrives from a request-handling layer.
///
/// Every field is optional so that absent fields can be reported by name
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub herd_size: Option<i64>,
}

impl TryFrom<RequestPayload> for FormulationRequest {
    type Error = FormulationError;

    fn try_from(payload: RequestPayload) -> Result<Self, Self::Error> {
        let ingredients = payload
            .ingredients
            .ok_or(FormulationError::MissingField("ingredients"))?;
        let stage: Stage = payload
            .stage
            .ok_or(FormulationError::MissingField("stage"))?
            .parse()?;
        let herd_size = payload
            .herd_size
            .ok_or(FormulationError::MissingField("herdSize"))?;
        let herd_size = Self::checked_herd_size(herd_size)?;

        FormulationRequest::new(ingredients, stage, herd_size)
    }
}
