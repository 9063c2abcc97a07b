//! Applying a translation context to a form

use crate::ui::{for_each_translatable_mut, Control};
use crate::utils::helpers::scope_key;
use super::context::TranslationContext;

/// Translate a form's title and every translatable control below it
///
/// The title is looked up under the form name, nested text under
/// `{form}.{control}`. Returns the number of texts that changed.
pub fn translate_form(form: &mut Control, context: &mut TranslationContext) -> usize {
    let form_name = form.name.clone();
    let mut updated = usize::from(apply(context, &form_name, &mut form.text));

    for_each_translatable_mut(form, |name, text| {
        let key = scope_key(&form_name, name);
        if apply(context, &key, text) {
            updated += 1;
        }
    });
    updated
}

fn apply(context: &mut TranslationContext, key: &str, text: &mut String) -> bool {
    let updated = match context.get_translated_text(key, Some(text.as_str())) {
        Some(updated) if updated != text.as_str() => updated.to_string(),
        _ => return false,
    };
    *text = updated;
    true
}
