//! Merchant account creation.
//!
//! DESIGN
//! ======
//! Validation runs entirely client-side before any request. Each field maps to
//! at most one message, shown under that field. On success the page moves on
//! to email verification; the API sends the verification link.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::collections::BTreeMap;
use std::sync::Arc;

use kasuwa::AuthService;
use kasuwa::net::types::SignupData;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::verify::VERIFY_ROUTE;

pub const BUSINESS_TYPES: [&str; 9] = [
    "Retail",
    "Services",
    "Manufacturing",
    "Agriculture",
    "Food & Beverage",
    "Health & Beauty",
    "Technology",
    "Education",
    "Other",
];

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    BusinessName,
    ContactPersonName,
    Email,
    Password,
    PhoneNumber,
    BusinessType,
    Location,
}

pub type SignupErrors = BTreeMap<SignupField, &'static str>;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub business_name: String,
    pub contact_person_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub business_type: String,
    pub location: String,
    pub whatsapp: String,
    pub facebook: String,
    pub instagram: String,
}

impl SignupForm {
    /// Validate every required field and build the request payload.
    pub fn validate(&self) -> Result<SignupData, SignupErrors> {
        let mut errors = SignupErrors::new();
        if self.business_name.trim().is_empty() {
            errors.insert(SignupField::BusinessName, "Business name is required");
        }
        if self.contact_person_name.trim().is_empty() {
            errors.insert(SignupField::ContactPersonName, "Contact person name is required");
        }
        if !is_valid_email(&self.email) {
            errors.insert(SignupField::Email, "Enter a valid email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(SignupField::Password, "Password must be at least 6 characters");
        }
        if !is_valid_phone(&self.phone_number) {
            errors.insert(SignupField::PhoneNumber, "Enter a valid phone number");
        }
        if self.business_type.is_empty() {
            errors.insert(SignupField::BusinessType, "Select a business type");
        }
        if self.location.trim().is_empty() {
            errors.insert(SignupField::Location, "Location is required");
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SignupData {
            business_name: self.business_name.trim().to_owned(),
            contact_person_name: self.contact_person_name.trim().to_owned(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone_number: self.phone_number.clone(),
            business_type: self.business_type.clone(),
            location: self.location.trim().to_owned(),
            whatsapp: optional(&self.whatsapp),
            facebook: optional(&self.facebook),
            instagram: optional(&self.instagram),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Optional leading `+`, then 7 to 15 ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let service = expect_context::<Arc<AuthService>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(SignupErrors::new());
    let server_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match form.get().validate() {
            Ok(data) => data,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(SignupErrors::new());
        server_error.set(String::new());
        busy.set(true);

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match service.signup(&data).await {
                Ok(_) => navigate(VERIFY_ROUTE, NavigateOptions::default()),
                Err(e) => server_error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let error_for = move |field: SignupField| move || errors.get().get(&field).copied();

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create your merchant account"</h1>
                <p class="auth-card__subtitle">"Start selling on Kasuwan Gizo"</p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Business Name *"
                        value=Signal::derive(move || form.get().business_name)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.business_name = v);
                            errors.update(|e| { e.remove(&SignupField::BusinessName); });
                        })
                        error=Signal::derive(error_for(SignupField::BusinessName))
                    />
                    <TextField
                        label="Contact Person Name *"
                        value=Signal::derive(move || form.get().contact_person_name)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.contact_person_name = v);
                            errors.update(|e| { e.remove(&SignupField::ContactPersonName); });
                        })
                        error=Signal::derive(error_for(SignupField::ContactPersonName))
                    />
                    <TextField
                        label="Email Address *"
                        input_type="email"
                        value=Signal::derive(move || form.get().email)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.email = v);
                            errors.update(|e| { e.remove(&SignupField::Email); });
                        })
                        error=Signal::derive(error_for(SignupField::Email))
                    />
                    <TextField
                        label="Password *"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.password = v);
                            errors.update(|e| { e.remove(&SignupField::Password); });
                        })
                        error=Signal::derive(error_for(SignupField::Password))
                    />
                    <TextField
                        label="Phone Number *"
                        input_type="tel"
                        placeholder="+234XXXXXXXXXX"
                        value=Signal::derive(move || form.get().phone_number)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.phone_number = v);
                            errors.update(|e| { e.remove(&SignupField::PhoneNumber); });
                        })
                        error=Signal::derive(error_for(SignupField::PhoneNumber))
                    />
                    <label class="auth-label">"Type of Business *"</label>
                    <select
                        class="auth-input"
                        prop:value=move || form.get().business_type
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.business_type = v);
                            errors.update(|e| { e.remove(&SignupField::BusinessType); });
                        }
                    >
                        <option value="">"Select business type"</option>
                        {BUSINESS_TYPES
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || error_for(SignupField::BusinessType)().is_some()>
                        <p class="auth-field-error">{move || error_for(SignupField::BusinessType)()}</p>
                    </Show>
                    <TextField
                        label="Location *"
                        placeholder="City, State"
                        value=Signal::derive(move || form.get().location)
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.location = v);
                            errors.update(|e| { e.remove(&SignupField::Location); });
                        })
                        error=Signal::derive(error_for(SignupField::Location))
                    />
                    <TextField
                        label="WhatsApp Number"
                        input_type="tel"
                        placeholder="+234XXXXXXXXXX"
                        value=Signal::derive(move || form.get().whatsapp)
                        on_input=Callback::new(move |v| form.update(|f| f.whatsapp = v))
                        error=Signal::derive(|| None)
                    />
                    <TextField
                        label="Facebook Profile"
                        placeholder="https://facebook.com/yourbusiness or any link"
                        value=Signal::derive(move || form.get().facebook)
                        on_input=Callback::new(move |v| form.update(|f| f.facebook = v))
                        error=Signal::derive(|| None)
                    />
                    <TextField
                        label="Instagram Handle"
                        placeholder="@yourbusiness or any link"
                        value=Signal::derive(move || form.get().instagram)
                        on_input=Callback::new(move |v| form.update(|f| f.instagram = v))
                        error=Signal::derive(|| None)
                    />
                    <Show when=move || !server_error.get().is_empty()>
                        <p class="auth-error">{move || server_error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <label class="auth-label">{label}</label>
        <input
            class="auth-input"
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
        <Show when=move || error.get().is_some()>
            <p class="auth-field-error">{move || error.get()}</p>
        </Show>
    }
}
