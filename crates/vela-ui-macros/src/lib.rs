//! Proc-macros for vela-ui.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style
//!   methods for each named field in a struct.
//!
//! ## Field control
//! - `#[with_builders(skip)]`: exclude the field from builder generation.
//! - `#[with_builders(into)]`: make the generated method accept
//!   `impl Into<FieldType>` instead of the field type itself.
//!
//! ### Example
//! ```ignore
//! use vela_ui_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct ToastSpec {
//!     #[with_builders(into)]
//!     pub message: String,
//!     pub duration: std::time::Duration,
//!     #[with_builders(skip)]
//!     pub internal_only: bool,
//! }
//!
//! let spec = ToastSpec::default()
//!     .with_message("saved")          // takes impl Into<String>
//!     .with_duration(Duration::ZERO); // takes Duration
//! // .with_internal_only(...) is NOT generated.
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

/// Per-field configuration parsed from `#[with_builders(...)]` attributes.
#[derive(Default)]
struct FieldConfig {
    skip: bool,
    into: bool,
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`.
///
/// Field attributes:
/// - `#[with_builders(skip)]`: do not generate a builder method for this field.
/// - `#[with_builders(into)]`: accept `impl Into<FieldType>`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            // Named fields always have idents, but keep this defensive.
            continue;
        };

        let config = field_config(field);
        if config.skip {
            continue;
        }

        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);

        let method = if config.into {
            quote! {
                #[inline]
                pub fn #method_ident(mut self, value: impl ::core::convert::Into<#field_ty>) -> Self {
                    self.#field_ident = value.into();
                    self
                }
            }
        } else {
            quote! {
                #[inline]
                pub fn #method_ident(mut self, value: #field_ty) -> Self {
                    self.#field_ident = value;
                    self
                }
            }
        };
        methods.push(method);
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

fn field_config(field: &Field) -> FieldConfig {
    let mut config = FieldConfig::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("with_builders") {
            continue;
        }

        // Unknown nested items are ignored (forward-compatible).
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                config.skip = true;
            } else if meta.path.is_ident("into") {
                config.into = true;
            }
            Ok(())
        });
    }

    config
}
