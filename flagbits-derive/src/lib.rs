use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result, parse_macro_input};

/// Derives `flagbits::BitFlag` for a unit-variant enum.
///
/// Every variant must carry a `#[flag(N)]` attribute giving its bit
/// position. Positions must be unique and below 64; violations are
/// compile errors.
#[proc_macro_derive(BitFlag, attributes(flag))]
pub fn derive_bit_flag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_bit_flag_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_bit_flag_impl(input: DeriveInput) -> Result<TokenStream2> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "BitFlag can only be derived for enums",
            ));
        }
    };

    let mut parsed: Vec<(&syn::Ident, u32)> = Vec::with_capacity(variants.len());

    for variant in variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "BitFlag variants cannot have fields",
            ));
        }

        let position = parse_flag_attr(variant)?;

        if position >= 64 {
            return Err(Error::new_spanned(
                &variant.ident,
                format!("flag position {} exceeds 63", position),
            ));
        }

        for (existing, existing_position) in &parsed {
            if *existing_position == position {
                return Err(Error::new_spanned(
                    &variant.ident,
                    format!(
                        "duplicate flag position {}: already used by '{}'",
                        position, existing
                    ),
                ));
            }
        }

        parsed.push((&variant.ident, position));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let members = parsed.iter().map(|(variant, _)| {
        quote! { #name::#variant }
    });

    let position_arms = parsed.iter().map(|(variant, position)| {
        quote! { #name::#variant => #position, }
    });

    Ok(quote! {
        impl #impl_generics flagbits::BitFlag for #name #ty_generics #where_clause {
            const MEMBERS: &'static [Self] = &[#(#members),*];

            #[inline]
            fn position(self) -> u32 {
                match self {
                    #(#position_arms)*
                }
            }
        }
    })
}

fn parse_flag_attr(variant: &syn::Variant) -> Result<u32> {
    for attr in &variant.attrs {
        if attr.path().is_ident("flag") {
            let lit: syn::LitInt = attr.parse_args()?;
            return lit.base10_parse();
        }
    }

    Err(Error::new_spanned(
        &variant.ident,
        "variant requires a #[flag(N)] attribute giving its bit position",
    ))
}
