use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields, GenericParam, LitStr,
    Visibility,
};

/// Derive macro for struct-to-[`DynamicValue`] conversion.
///
/// Generates two impls on the annotated struct:
///
/// - `Fields` with `FIELDS: &[FieldInfo]`, one entry per declared field
///   (private fields included, flagged `visible: false`).
/// - `Convert`, which builds a `Record` from the `pub` fields, keyed by
///   `ConvertOptions::field_key`.
///
/// Per-field names are attached with `#[tag(label = "name", ...)]`. Any label
/// is accepted; the options decide which one is read.
///
/// # Example
///
/// ```ignore
/// #[derive(Convert)]
/// pub struct Quote {
///     #[tag(json = "symbol", db = "sym")]
///     pub symbol: String,
///
///     pub bid: f64,
///
///     cursor: u64,
/// }
/// ```
///
/// Only structs with named fields (or unit structs) are supported. Generic
/// type parameters get a `Convert` bound.
///
/// [`DynamicValue`]: ../convstruct/enum.DynamicValue.html
#[proc_macro_derive(Convert, attributes(tag))]
pub fn derive_convert(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Convert only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Convert only supports structs",
            ))
        }
    };

    let mut field_info_tokens = Vec::new();
    let mut convert_tokens = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let declared_name = field_ident.unraw().to_string();
        let visible = matches!(field.vis, Visibility::Public(_));

        let tags = parse_tags(field)?;
        let tag_tokens = tags.iter().map(|(label, value)| quote! { (#label, #value) });

        field_info_tokens.push(quote! {
            ::convstruct::FieldInfo {
                name: #declared_name,
                visible: #visible,
                tags: &[#(#tag_tokens),*],
            }
        });

        // Private fields are described but never read, so their types need no bound.
        if visible {
            convert_tokens.push(quote! {
                if let Some(__key) = __options.field_key(
                    &<Self as ::convstruct::Fields>::FIELDS[#index],
                ) {
                    __record.insert_field(
                        __key,
                        ::convstruct::Convert::convert_with(&self.#field_ident, __options),
                    );
                }
            });
        }
    }

    let capacity = convert_tokens.len();

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::convstruct::Convert));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::convstruct::Fields for #name #ty_generics #where_clause {
            const FIELDS: &'static [::convstruct::FieldInfo] = &[
                #(#field_info_tokens),*
            ];
        }

        impl #impl_generics ::convstruct::Convert for #name #ty_generics #where_clause {
            fn convert_with(
                &self,
                __options: &::convstruct::ConvertOptions,
            ) -> ::convstruct::DynamicValue {
                #[allow(unused_mut)]
                let mut __record = ::convstruct::Record::with_capacity(#capacity);
                #(#convert_tokens)*
                ::convstruct::DynamicValue::Record(__record)
            }
        }
    };

    Ok(TokenStream::from(expanded))
}

/// Collect `(label, value)` pairs from every `#[tag(...)]` on a field.
///
/// A label repeated across attributes keeps its first value.
fn parse_tags(field: &Field) -> Result<Vec<(String, String)>, syn::Error> {
    let mut tags: Vec<(String, String)> = Vec::new();

    for attr in &field.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let label = meta
                .path
                .get_ident()
                .map(|ident| ident.unraw().to_string())
                .ok_or_else(|| meta.error("expected a tag label, e.g. `json = \"name\"`"))?;
            let value: LitStr = meta.value()?.parse()?;
            if !tags.iter().any(|(existing, _)| *existing == label) {
                tags.push((label, value.value()));
            }
            Ok(())
        })?;
    }

    Ok(tags)
}
