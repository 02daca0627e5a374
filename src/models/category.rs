use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

// Lo que recibimos del frontend al crear o editar una categoría.
// Los campos son Option para que un campo ausente llegue a validate()
// y no se convierta en un rechazo del extractor JSON.
#[derive(Debug, Deserialize)]
pub struct EditorCategorySchema {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl EditorCategorySchema {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push("El nombre es obligatorio".to_string());
        }
        if is_blank(&self.slug) {
            errors.push("El slug es obligatorio".to_string());
        }

        errors
    }

    // Categoría nueva: el id lo asigna la base de datos y el slug va en minúsculas
    pub fn to_new_category(&self) -> Category {
        Category {
            id: 0,
            name: self.name.clone().unwrap_or_default(),
            slug: self.slug.as_deref().unwrap_or_default().to_lowercase(),
        }
    }

    // En la edición el slug se guarda tal cual llega (sin minúsculas)
    pub fn apply_to(&self, category: &mut Category) {
        category.name = self.name.clone().unwrap_or_default();
        category.slug = self.slug.clone().unwrap_or_default();
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |value| value.trim().is_empty())
}
