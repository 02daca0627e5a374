use serde::Serialize;

// Envoltorio común de todas las respuestas: { "data": T | null, "errors": [..] }
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ResultEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::errors(vec![message.into()])
    }

    pub fn errors(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }
}
