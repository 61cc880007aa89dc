use std::collections::HashMap;

use darling::FromMeta;
use darling::ast::NestedMeta;
use quote::quote;
use syn::ext::IdentExt as _;

use crate::rename::RenameRule;
use crate::tokens_to_string;

mod tests;

pub fn enumeration2(
    attr: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr) {
        Ok(args) => args,
        Err(error) => return darling::Error::from(error).write_errors(),
    };
    let attr_args = match EnumerationMacroArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(error) => return error.write_errors(),
    };

    let item: syn::Item = match syn::parse2(item) {
        Ok(item) => item,
        Err(err) => return err.into_compile_error(),
    };

    let result = attr_args.crate_path().and_then(|crate_name| {
        match item {
            syn::Item::Enum(item_enum) => process_enum(&crate_name, &attr_args, item_enum),
            item => Err(
                darling::Error::custom("#[enumeration] only applies to enums").with_span(&item),
            ),
        }
    });
    let enumeration = match result {
        Ok(enumeration) => enumeration,
        Err(error) => return error.write_errors(),
    };

    if attr_args.debug {
        println!("\nGenerated:\n{}\n", tokens_to_string(&enumeration));
    }
    return enumeration;
}

fn process_enum(
    crate_name: &syn::Path,
    attr_args: &EnumerationMacroArgs,
    mut item_enum: syn::ItemEnum,
) -> darling::Result<proc_macro2::TokenStream> {
    let generics = &item_enum.generics;
    if !generics.params.is_empty() || generics.where_clause.is_some() {
        return Err(
            darling::Error::custom("#[enumeration] does not support generic enums")
                .with_span(generics),
        );
    }
    if item_enum.variants.is_empty() {
        return Err(
            darling::Error::custom("#[enumeration] requires at least one variant")
                .with_span(&item_enum.ident),
        );
    }

    let mut constants: Vec<Constant> = vec![];
    let mut seen: HashMap<String, syn::Ident> = HashMap::new();
    let mut errors = darling::Error::accumulator();
    for variant in &mut item_enum.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            errors.push(
                darling::Error::custom("#[enumeration] variants cannot carry fields")
                    .with_span(&variant.fields),
            );
            continue;
        }
        let Some(variant_args) = errors.handle(take_variant_args(&mut variant.attrs)) else {
            continue;
        };
        let ident = variant.ident.unraw().to_string();
        let name = match (variant_args.rename, attr_args.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rename_all)) => rename_all.apply(&ident),
            (None, None) => ident,
        };
        let cfgs: Vec<syn::Attribute> = variant
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .cloned()
            .collect();
        // Names of cfg-gated variants are checked by Registry::new, once cfg is resolved.
        if cfgs.is_empty()
            && let Some(previous) = seen.insert(name.clone(), variant.ident.clone())
        {
            errors.push(
                darling::Error::custom(format!(
                    "Variants {previous} and {} are both registered as {name:?}",
                    variant.ident
                ))
                .with_span(&variant.ident),
            );
            continue;
        }
        constants.push(Constant {
            name,
            variant: variant.ident.clone(),
            cfgs,
        });
    }
    errors.finish()?;

    let ident = &item_enum.ident;
    let type_name = ident.unraw().to_string();
    let entries = constants.iter().map(|Constant { name, variant, cfgs }| {
        quote! { #(#cfgs)* (#name, Self::#variant), }
    });

    let ord = (!attr_args.skip_ord).then(|| {
        quote! {
            impl ::core::cmp::PartialOrd for #ident {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::Ord for #ident {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    ::core::cmp::Ord::cmp(
                        &#crate_name::Enumeration::ordinal(self),
                        &#crate_name::Enumeration::ordinal(other),
                    )
                }
            }
        }
    });

    let display = (!attr_args.skip_display).then(|| {
        quote! {
            impl ::core::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(#crate_name::Enumeration::name(self))
                }
            }
        }
    });

    let from_str = (!attr_args.skip_from_str).then(|| {
        quote! {
            impl ::core::str::FromStr for #ident {
                type Err = #crate_name::ValueOfError;

                fn from_str(name: &str) -> ::core::result::Result<Self, Self::Err> {
                    <Self as #crate_name::Enumeration>::value_of(name)
                }
            }
        }
    });

    Ok(quote! {
        #item_enum

        impl #crate_name::NamedType for #ident {
            fn type_name() -> &'static str {
                return #type_name;
            }
        }

        impl #crate_name::Enumeration for #ident {
            fn registry() -> &'static #crate_name::Registry<Self> {
                static REGISTRY: ::std::sync::OnceLock<#crate_name::Registry<#ident>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| {
                    #crate_name::Registry::new(#type_name, [#(#entries)*])
                        .unwrap_or_else(|error| ::core::panic!("{error}"))
                })
            }
        }

        #ord
        #display
        #from_str
    })
}

/// Removes the `#[enumeration(..)]` helper attributes from a variant and parses them.
fn take_variant_args(attrs: &mut Vec<syn::Attribute>) -> darling::Result<VariantArgs> {
    let (helpers, others) = std::mem::take(attrs)
        .into_iter()
        .partition::<Vec<_>, _>(|attr| attr.path().is_ident("enumeration"));
    *attrs = others;

    let mut variant_args = VariantArgs::default();
    for helper in &helpers {
        let VariantArgs { rename } = VariantArgs::from_meta(&helper.meta)?;
        if rename.is_some() {
            variant_args.rename = rename;
        }
    }
    Ok(variant_args)
}

#[derive(Debug, FromMeta)]
struct EnumerationMacroArgs {
    #[darling(default)]
    debug: bool,

    #[darling(default)]
    crate_override: Option<String>,

    #[darling(default)]
    rename_all: Option<RenameRule>,

    /// Leaves `PartialOrd` and `Ord` to the user.
    #[darling(default)]
    skip_ord: bool,

    /// Leaves `Display` to the user.
    #[darling(default)]
    skip_display: bool,

    /// Leaves `FromStr` to the user.
    #[darling(default)]
    skip_from_str: bool,
}

struct Constant {
    name: String,
    variant: syn::Ident,
    cfgs: Vec<syn::Attribute>,
}

impl EnumerationMacroArgs {
    fn crate_path(&self) -> darling::Result<syn::Path> {
        let crate_name = self.crate_override.as_deref().unwrap_or("enumeth");
        syn::parse_str(crate_name).map_err(|error| {
            darling::Error::custom(format!("Invalid crate_override {crate_name:?}: {error}"))
        })
    }
}

#[derive(Debug, Default, FromMeta)]
struct VariantArgs {
    #[darling(default)]
    rename: Option<String>,
}
