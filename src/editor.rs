// src/editor.rs

//! The admin product form's state machine. The presentation layer owns the
//! widgets; this type owns the legal transitions: `Idle` until a record is
//! selected, then `Creating` or `Editing`, and back to `Idle` on submit
//! (after which the caller refreshes the product list) or on cancel (no
//! mutation). `Idle` is always the terminal state.

use crate::models::Product;
use crate::services::catalog::{CreateProduct, UpdateProduct};
use uuid::Uuid;

/// The editable form fields, dollar-denominated like the admin UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub image_url: String,
  pub stock_quantity: i32,
}

impl ProductForm {
  fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      description: product.description.clone().unwrap_or_default(),
      price: f64::from(product.price_cents) / 100.0,
      image_url: product.image_url.clone(),
      stock_quantity: product.stock_quantity,
    }
  }

  fn into_create(self) -> CreateProduct {
    CreateProduct {
      name: self.name,
      description: Some(self.description),
      price: self.price,
      image_url: self.image_url,
      stock_quantity: self.stock_quantity,
    }
  }

  // The form always submits every field, so an edit is a full overwrite.
  fn into_update(self) -> UpdateProduct {
    UpdateProduct {
      name: Some(self.name),
      description: Some(self.description),
      price: Some(self.price),
      image_url: Some(self.image_url),
      stock_quantity: Some(self.stock_quantity),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
  #[default]
  Idle,
  Creating {
    form: ProductForm,
  },
  Editing {
    id: Uuid,
    form: ProductForm,
  },
}

/// What a submit produced: the mutation the caller should apply through
/// `CatalogService`, then refresh its list.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
  Create(CreateProduct),
  Update(Uuid, UpdateProduct),
}

impl EditorState {
  /// Opens a blank form. Any in-progress draft is discarded.
  pub fn start_create(&mut self) {
    *self = EditorState::Creating {
      form: ProductForm::default(),
    };
  }

  /// Opens a form pre-filled from an existing product.
  pub fn start_edit(&mut self, product: &Product) {
    *self = EditorState::Editing {
      id: product.id,
      form: ProductForm::from_product(product),
    };
  }

  /// The draft under edit, if any.
  pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
    match self {
      EditorState::Idle => None,
      EditorState::Creating { form } | EditorState::Editing { form, .. } => Some(form),
    }
  }

  /// Discards the draft and returns to `Idle` without any mutation.
  pub fn cancel(&mut self) {
    *self = EditorState::Idle;
  }

  /// Closes the form and returns the mutation to apply, or `None` when no
  /// draft was open. The state is `Idle` afterwards either way.
  pub fn submit(&mut self) -> Option<Submission> {
    match std::mem::take(self) {
      EditorState::Idle => None,
      EditorState::Creating { form } => Some(Submission::Create(form.into_create())),
      EditorState::Editing { id, form } => Some(Submission::Update(id, form.into_update())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn sample_product() -> Product {
    Product {
      id: Uuid::new_v4(),
      name: "Radiance Face Serum".to_string(),
      description: Some("Vitamin C serum".to_string()),
      price_cents: 4999,
      image_url: "https://images.example.com/serum.jpg".to_string(),
      stock_quantity: 12,
      created_at: Utc::now(),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn starts_idle_and_cancel_returns_to_idle() {
    let mut editor = EditorState::default();
    assert_eq!(editor, EditorState::Idle);

    editor.start_create();
    assert!(editor.form_mut().is_some());

    editor.cancel();
    assert_eq!(editor, EditorState::Idle);
    assert!(editor.submit().is_none());
  }

  #[test]
  fn create_flow_yields_create_submission() {
    let mut editor = EditorState::default();
    editor.start_create();
    {
      let form = editor.form_mut().unwrap();
      form.name = "Velvet Matte Lipstick".to_string();
      form.price = 24.99;
      form.stock_quantity = 30;
    }

    let submission = editor.submit().unwrap();
    assert_eq!(editor, EditorState::Idle);
    match submission {
      Submission::Create(input) => {
        assert_eq!(input.name, "Velvet Matte Lipstick");
        assert_eq!(input.price, 24.99);
        assert_eq!(input.stock_quantity, 30);
      }
      other => panic!("expected Create submission, got {:?}", other),
    }
  }

  #[test]
  fn edit_flow_prefills_and_yields_update_submission() {
    let product = sample_product();
    let mut editor = EditorState::default();
    editor.start_edit(&product);

    {
      let form = editor.form_mut().unwrap();
      assert_eq!(form.name, "Radiance Face Serum");
      assert_eq!(form.price, 49.99);
      form.stock_quantity = 5;
    }

    let submission = editor.submit().unwrap();
    assert_eq!(editor, EditorState::Idle);
    match submission {
      Submission::Update(id, patch) => {
        assert_eq!(id, product.id);
        assert_eq!(patch.stock_quantity, Some(5));
        assert_eq!(patch.name.as_deref(), Some("Radiance Face Serum"));
      }
      other => panic!("expected Update submission, got {:?}", other),
    }
  }

  #[test]
  fn starting_a_new_draft_replaces_the_old_one() {
    let product = sample_product();
    let mut editor = EditorState::default();
    editor.start_edit(&product);
    editor.start_create();
    assert_eq!(
      editor,
      EditorState::Creating {
        form: ProductForm::default()
      }
    );
  }
}
