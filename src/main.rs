mod setup;

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::rc::Rc;

use forms::{build_page, DocumentAdapter, DonationTrackerForm, EventSignupForm, Form, ERROR_CLASS};
use serde::Serialize;
use setup::{set_up_tracing, Config, FormKind};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env(std::env::args().skip(1))?;
    set_up_tracing(&config);

    let values = load_values(config.values_path.as_deref())?;
    tracing::info!(form = ?config.form, fields = values.len(), "submitting form");
    let accepted = match config.form {
        FormKind::EventSignup => submit::<EventSignupForm>(&values)?,
        FormKind::DonationTracker => submit::<DonationTrackerForm>(&values)?,
    };

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_values(path: Option<&str>) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Fills the form `F` with `values`, submits it once, and prints either the
/// assembled record as JSON or each error annotation left on the page.
fn submit<F>(values: &HashMap<String, String>) -> Result<bool, Box<dyn Error>>
where
    F: Form + 'static,
    F::Record: Serialize + 'static,
{
    let document = build_page::<F>(values);
    let form = document
        .get_element_by_id(F::FORM_ID)
        .ok_or_else(|| forms::FormError::MissingElement(F::FORM_ID.to_string()))?;

    let submitted = Rc::new(RefCell::new(None));
    let slot = submitted.clone();
    forms::bind::<F, _, _, _>(&form, DocumentAdapter::new(document.clone()), move |record| {
        *slot.borrow_mut() = Some(record);
    })?;
    form.dispatch_submit();

    let record = submitted.borrow_mut().take();
    match record {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(true)
        }
        None => {
            for annotation in document.query_all_by_class(ERROR_CLASS) {
                let field = annotation
                    .parent()
                    .and_then(|scope| {
                        scope
                            .id()
                            .map(|id| id.trim_end_matches("-section").to_string())
                    })
                    .unwrap_or_default();
                eprintln!("{}: {}", field, annotation.text_content());
            }
            Ok(false)
        }
    }
}
