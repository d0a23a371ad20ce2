//! Input forms backing the create-bot and add-account modals.
//!
//! Required fields mirror the service's own validation: a submission with a
//! missing required field never reaches the client; instead focus jumps to
//! the first missing field.

use botdash_client::{CreateAccountRequest, CreateBotRequest};
use botdash_core::BotType;
use serde_json::Map;

/// Fields of the create-bot form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateBotField {
    Name,
    Description,
    BotType,
    Token,
    ApiId,
    ApiHash,
    PhoneNumber,
}

impl CreateBotField {
    pub fn label(&self) -> &'static str {
        match self {
            CreateBotField::Name => "Name",
            CreateBotField::Description => "Description",
            CreateBotField::BotType => "Type",
            CreateBotField::Token => "Bot token",
            CreateBotField::ApiId => "API ID",
            CreateBotField::ApiHash => "API hash",
            CreateBotField::PhoneNumber => "Phone number",
        }
    }
}

const TOKEN_BASED_FIELDS: &[CreateBotField] = &[
    CreateBotField::Name,
    CreateBotField::Description,
    CreateBotField::BotType,
    CreateBotField::Token,
];

const ACCOUNT_BASED_FIELDS: &[CreateBotField] = &[
    CreateBotField::Name,
    CreateBotField::Description,
    CreateBotField::BotType,
    CreateBotField::ApiId,
    CreateBotField::ApiHash,
    CreateBotField::PhoneNumber,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBotForm {
    pub name: String,
    pub description: String,
    pub bot_type: BotType,
    pub token: String,
    pub api_id: String,
    pub api_hash: String,
    pub phone_number: String,
    pub focus: CreateBotField,
}

impl Default for CreateBotForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            bot_type: BotType::TokenBased,
            token: String::new(),
            api_id: String::new(),
            api_hash: String::new(),
            phone_number: String::new(),
            focus: CreateBotField::Name,
        }
    }
}

impl CreateBotForm {
    /// Fields shown for the current bot type
    pub fn fields(&self) -> &'static [CreateBotField] {
        match self.bot_type {
            BotType::TokenBased => TOKEN_BASED_FIELDS,
            BotType::AccountBased => ACCOUNT_BASED_FIELDS,
        }
    }

    pub fn value(&self, field: CreateBotField) -> &str {
        match field {
            CreateBotField::Name => &self.name,
            CreateBotField::Description => &self.description,
            CreateBotField::BotType => self.bot_type.label(),
            CreateBotField::Token => &self.token,
            CreateBotField::ApiId => &self.api_id,
            CreateBotField::ApiHash => &self.api_hash,
            CreateBotField::PhoneNumber => &self.phone_number,
        }
    }

    fn text_mut(&mut self, field: CreateBotField) -> Option<&mut String> {
        match field {
            CreateBotField::Name => Some(&mut self.name),
            CreateBotField::Description => Some(&mut self.description),
            CreateBotField::BotType => None,
            CreateBotField::Token => Some(&mut self.token),
            CreateBotField::ApiId => Some(&mut self.api_id),
            CreateBotField::ApiHash => Some(&mut self.api_hash),
            CreateBotField::PhoneNumber => Some(&mut self.phone_number),
        }
    }

    pub fn is_required(&self, field: CreateBotField) -> bool {
        match field {
            CreateBotField::Name => true,
            CreateBotField::Description | CreateBotField::BotType => false,
            CreateBotField::Token => self.bot_type == BotType::TokenBased,
            CreateBotField::ApiId | CreateBotField::ApiHash | CreateBotField::PhoneNumber => {
                self.bot_type == BotType::AccountBased
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.focus == CreateBotField::BotType {
            if c == ' ' {
                self.toggle_bot_type();
            }
            return;
        }
        if let Some(text) = self.text_mut(self.focus) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut(self.focus) {
            text.pop();
        }
    }

    pub fn toggle_bot_type(&mut self) {
        self.bot_type = self.bot_type.toggled();
        if !self.fields().contains(&self.focus) {
            self.focus = CreateBotField::BotType;
        }
    }

    pub fn next_field(&mut self) {
        self.focus = cycle(self.fields(), self.focus, 1);
    }

    pub fn prev_field(&mut self) {
        self.focus = cycle(self.fields(), self.focus, -1);
    }

    /// First required field left blank, in display order
    pub fn missing_required(&self) -> Option<CreateBotField> {
        self.fields()
            .iter()
            .copied()
            .find(|f| self.is_required(*f) && self.value(*f).trim().is_empty())
    }

    /// Build the request body; fields hidden for the chosen type are omitted
    pub fn to_request(&self) -> CreateBotRequest {
        let shown = |field: CreateBotField| {
            if self.fields().contains(&field) {
                non_empty(self.value(field))
            } else {
                None
            }
        };

        CreateBotRequest {
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
            bot_type: self.bot_type,
            token: shown(CreateBotField::Token),
            api_id: shown(CreateBotField::ApiId),
            api_hash: shown(CreateBotField::ApiHash),
            phone_number: shown(CreateBotField::PhoneNumber),
            config: Map::new(),
        }
    }
}

/// Fields of the add-account form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    PhoneNumber,
    ApiId,
    ApiHash,
}

impl AccountField {
    pub const ALL: &'static [AccountField] =
        &[AccountField::PhoneNumber, AccountField::ApiId, AccountField::ApiHash];

    pub fn label(&self) -> &'static str {
        match self {
            AccountField::PhoneNumber => "Phone number",
            AccountField::ApiId => "API ID",
            AccountField::ApiHash => "API hash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountForm {
    pub phone_number: String,
    pub api_id: String,
    pub api_hash: String,
    pub focus: AccountField,
}

impl Default for AddAccountForm {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            api_id: String::new(),
            api_hash: String::new(),
            focus: AccountField::PhoneNumber,
        }
    }
}

impl AddAccountForm {
    pub fn value(&self, field: AccountField) -> &str {
        match field {
            AccountField::PhoneNumber => &self.phone_number,
            AccountField::ApiId => &self.api_id,
            AccountField::ApiHash => &self.api_hash,
        }
    }

    fn text_mut(&mut self, field: AccountField) -> &mut String {
        match field {
            AccountField::PhoneNumber => &mut self.phone_number,
            AccountField::ApiId => &mut self.api_id,
            AccountField::ApiHash => &mut self.api_hash,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.text_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.text_mut(self.focus).pop();
    }

    pub fn next_field(&mut self) {
        self.focus = cycle(AccountField::ALL, self.focus, 1);
    }

    pub fn prev_field(&mut self) {
        self.focus = cycle(AccountField::ALL, self.focus, -1);
    }

    pub fn missing_required(&self) -> Option<AccountField> {
        AccountField::ALL
            .iter()
            .copied()
            .find(|f| self.value(*f).trim().is_empty())
    }

    pub fn to_request(&self) -> CreateAccountRequest {
        CreateAccountRequest {
            phone_number: self.phone_number.trim().to_string(),
            api_id: self.api_id.trim().to_string(),
            api_hash: self.api_hash.trim().to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, step: isize) -> T {
    let len = items.len() as isize;
    let pos = items.iter().position(|i| *i == current).unwrap_or(0) as isize;
    items[(pos + step).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut CreateBotForm, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn test_token_based_request() {
        let mut form = CreateBotForm::default();
        type_text(&mut form, "Echo");
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.focus, CreateBotField::Token);
        type_text(&mut form, "abc");

        assert_eq!(form.missing_required(), None);
        let request = form.to_request();
        assert_eq!(request.name, "Echo");
        assert_eq!(request.bot_type, BotType::TokenBased);
        assert_eq!(request.token.as_deref(), Some("abc"));
        assert_eq!(request.description, None);
        assert!(request.config.is_empty());
    }

    #[test]
    fn test_missing_required_follows_bot_type() {
        let mut form = CreateBotForm::default();
        assert_eq!(form.missing_required(), Some(CreateBotField::Name));

        form.name = "Forwarder".into();
        assert_eq!(form.missing_required(), Some(CreateBotField::Token));

        form.toggle_bot_type();
        assert_eq!(form.missing_required(), Some(CreateBotField::ApiId));
        form.api_id = "1".into();
        form.api_hash = "h".into();
        assert_eq!(form.missing_required(), Some(CreateBotField::PhoneNumber));
    }

    #[test]
    fn test_hidden_fields_not_sent() {
        let mut form = CreateBotForm {
            name: "Echo".into(),
            token: "abc".into(),
            api_id: "leftover".into(),
            ..CreateBotForm::default()
        };
        assert_eq!(form.to_request().api_id, None);

        form.toggle_bot_type();
        let request = form.to_request();
        assert_eq!(request.token, None);
        assert_eq!(request.api_id.as_deref(), Some("leftover"));
    }

    #[test]
    fn test_bot_type_field_takes_space_only() {
        let mut form = CreateBotForm {
            focus: CreateBotField::BotType,
            ..CreateBotForm::default()
        };
        form.input_char('x');
        assert_eq!(form.bot_type, BotType::TokenBased);
        form.input_char(' ');
        assert_eq!(form.bot_type, BotType::AccountBased);
        form.backspace();
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_toggle_moves_focus_off_hidden_field() {
        let mut form = CreateBotForm {
            focus: CreateBotField::Token,
            ..CreateBotForm::default()
        };
        form.toggle_bot_type();
        assert_eq!(form.focus, CreateBotField::BotType);
    }

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = CreateBotForm::default();
        form.prev_field();
        assert_eq!(form.focus, CreateBotField::Token);
        form.next_field();
        assert_eq!(form.focus, CreateBotField::Name);
    }

    #[test]
    fn test_account_form() {
        let mut form = AddAccountForm::default();
        assert_eq!(form.missing_required(), Some(AccountField::PhoneNumber));

        for c in "+15550100".chars() {
            form.input_char(c);
        }
        form.next_field();
        form.input_char('7');
        form.backspace();
        assert_eq!(form.missing_required(), Some(AccountField::ApiId));

        form.api_id = "777".into();
        form.api_hash = "hash".into();
        assert_eq!(form.missing_required(), None);
        assert_eq!(form.to_request().phone_number, "+15550100");

        form.prev_field();
        form.prev_field();
        assert_eq!(form.focus, AccountField::ApiHash);
    }
}
