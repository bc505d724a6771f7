use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive macro for name-based field access.
///
/// Implements the `Record` trait for a struct with named fields:
///
/// - `get(field)` — clones the field and converts it via `IntoValue`.
/// - `set(field, value)` — converts via `FromValue` and assigns; unknown
///   field names and values of the wrong shape are ignored.
///
/// The struct must implement `Default` (the trait's supertrait) and `Clone`
/// on every exposed field type.
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Default, Clone)]
/// pub struct Account {
///     pub id: String,
///     pub created_date: chrono::DateTime<chrono::Utc>,
///
///     #[record(skip)]
///     pub dirty: bool,
/// }
/// ```
///
/// `#[record(skip)]` removes a field from name-based access entirely.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record only supports structs",
            ))
        }
    };

    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let field_name_str = field_name.to_string();

        // Parse #[record(...)] attribute.
        let mut skip = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown record attribute (expected 'skip')"))
                }
            })?;
        }

        if skip {
            continue;
        }

        get_arms.push(quote! {
            #field_name_str => Some(remap_api::value::IntoValue::into_value(
                self.#field_name.clone(),
            )),
        });

        set_arms.push(quote! {
            #field_name_str => {
                if let Some(v) = remap_api::value::FromValue::from_value(value) {
                    self.#field_name = v;
                }
            }
        });
    }

    let expanded = quote! {
        impl remap_api::record::Record for #name {
            fn get(&self, field: &str) -> Option<remap_api::value::Value> {
                match field {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set(&mut self, field: &str, value: remap_api::value::Value) {
                match field {
                    #(#set_arms)*
                    _ => {}
                }
            }
        }
    };

    Ok(TokenStream::from(expanded))
}
