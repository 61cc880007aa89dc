#![cfg(test)]

use quote::quote;

use crate::tokens_to_string;

fn expand(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> syn::File {
    let actual = super::enumeration2(attr, item);
    syn::parse2(actual.clone()).unwrap_or_else(|error| panic!("Error {error} parsing {actual}"))
}

fn trait_impls(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(syn::ItemImpl {
                trait_: Some((_, path, _)),
                ..
            }) => path.segments.last().map(|segment| segment.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn expand_error(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> String {
    let actual = super::enumeration2(attr, item).to_string();
    assert!(actual.contains("compile_error"), "Not an error: {actual}");
    return actual;
}

#[test]
fn enumeration_enum() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub enum Weekday {
            Monday,
            Tuesday,
            Wednesday,
        }
    };
    let actual = expand(quote! {}, sample);
    assert_eq!(
        vec![
            "NamedType",
            "Enumeration",
            "PartialOrd",
            "Ord",
            "Display",
            "FromStr"
        ],
        trait_impls(&actual)
    );

    let syn::Item::Enum(item_enum) = &actual.items[0] else {
        panic!("Expected the enum first");
    };
    assert_eq!("Weekday", item_enum.ident.to_string());
    assert_eq!(3, item_enum.variants.len());

    let actual = prettyplease::unparse(&actual);
    assert!(actual.contains("return \"Weekday\";"), "{actual}");
    assert!(actual.contains("enumeth::Registry<Weekday>"), "{actual}");
    let monday = actual.find("(\"Monday\", Self::Monday)");
    let tuesday = actual.find("(\"Tuesday\", Self::Tuesday)");
    let wednesday = actual.find("(\"Wednesday\", Self::Wednesday)");
    assert!(monday.is_some(), "{actual}");
    assert!(monday < tuesday && tuesday < wednesday, "{actual}");
}

#[test]
fn enumeration_rename() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Status {
            InProgress,
            #[enumeration(rename = "OK")]
            #[allow(dead_code)]
            Done,
            r#Final,
        }
    };
    let actual = expand(quote! { rename_all = "SCREAMING_SNAKE_CASE" }, sample);

    let syn::Item::Enum(item_enum) = &actual.items[0] else {
        panic!("Expected the enum first");
    };
    let done = &item_enum.variants[1];
    assert_eq!(1, done.attrs.len());
    assert!(done.attrs[0].path().is_ident("allow"));

    let actual = prettyplease::unparse(&actual);
    assert!(actual.contains("(\"IN_PROGRESS\", Self::InProgress)"), "{actual}");
    assert!(actual.contains("(\"OK\", Self::Done)"), "{actual}");
    assert!(actual.contains("(\"FINAL\", Self::r#Final)"), "{actual}");
}

#[test]
fn enumeration_crate_override() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Coin {
            Heads,
            Tails,
        }
    };
    let actual = expand(quote! { crate_override = "crate::reexports::enumeth" }, sample);
    let actual = prettyplease::unparse(&actual);
    assert!(
        actual.contains("impl crate::reexports::enumeth::Enumeration for Coin"),
        "{actual}"
    );
    assert!(!actual.contains("impl enumeth::"), "{actual}");
}

#[test]
fn enumeration_debug_output() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Coin {
            Heads,
        }
    };
    let actual = super::enumeration2(quote! { debug }, sample);
    assert!(tokens_to_string(&actual).contains("impl enumeth::NamedType for Coin"));
}

#[test]
fn not_an_enum() {
    let actual = expand_error(quote! {}, quote! { struct Point { x: i32, y: i32 } });
    assert!(actual.contains("only applies to enums"), "{actual}");
}

#[test]
fn generic_enum() {
    let actual = expand_error(quote! {}, quote! { enum Either<L, R> { Left, Right } });
    assert!(actual.contains("does not support generic enums"), "{actual}");
}

#[test]
fn empty_enum() {
    let actual = expand_error(quote! {}, quote! { enum Never {} });
    assert!(actual.contains("requires at least one variant"), "{actual}");
}

#[test]
fn variant_with_fields() {
    let actual = expand_error(
        quote! {},
        quote! {
            enum Shape {
                Point,
                Square(f64),
                Circle { radius: f64 },
            }
        },
    );
    assert_eq!(2, actual.matches("variants cannot carry fields").count(), "{actual}");
}

#[test]
fn duplicate_names() {
    let actual = expand_error(
        quote! {},
        quote! {
            enum Weekday {
                Monday,
                #[enumeration(rename = "Monday")]
                Tuesday,
            }
        },
    );
    assert!(actual.contains("Variants Monday and Tuesday"), "{actual}");

    let actual = expand_error(
        quote! { rename_all = "lowercase" },
        quote! {
            enum Mode {
                ReadWrite,
                Readwrite,
            }
        },
    );
    assert!(actual.contains("Variants ReadWrite and Readwrite"), "{actual}");
}

#[test]
fn invalid_arguments() {
    expand_error(quote! { rename_all = "kebab-case" }, quote! { enum A { B } });
    expand_error(quote! { unknown = true }, quote! { enum A { B } });
    expand_error(quote! { crate_override = "not a path" }, quote! { enum A { B } });
    expand_error(
        quote! {},
        quote! {
            enum A {
                #[enumeration(alias = "b")]
                B,
            }
        },
    );
}

#[test]
fn enumeration_cfg_variants() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Gated {
            A,
            #[cfg(any())]
            #[enumeration(rename = "Shared")]
            B,
            #[cfg(all())]
            #[enumeration(rename = "Shared")]
            C,
        }
    };
    let actual = expand(quote! {}, sample);

    let syn::Item::Enum(item_enum) = &actual.items[0] else {
        panic!("Expected the enum first");
    };
    let gated = &item_enum.variants[1];
    assert_eq!(1, gated.attrs.len());
    assert!(gated.attrs[0].path().is_ident("cfg"));

    let actual = prettyplease::unparse(&actual);
    let a = actual.find("(\"A\", Self::A)").expect(&actual);
    let registry = &actual[a..];
    let cfg_b = registry.find("cfg(any())").expect(&actual);
    let b = registry.find("(\"Shared\", Self::B)").expect(&actual);
    let cfg_c = registry.find("cfg(all())").expect(&actual);
    let c = registry.find("(\"Shared\", Self::C)").expect(&actual);
    assert!(cfg_b < b && b < cfg_c && cfg_c < c, "{actual}");
}

#[test]
fn enumeration_skip_std_traits() {
    let sample = quote! {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        enum Coin {
            Heads,
            Tails,
        }
    };
    let actual = expand(
        quote! { skip_ord, skip_display, skip_from_str },
        sample.clone(),
    );
    assert_eq!(vec!["NamedType", "Enumeration"], trait_impls(&actual));

    let actual = expand(quote! { skip_display }, sample);
    assert_eq!(
        vec!["NamedType", "Enumeration", "PartialOrd", "Ord", "FromStr"],
        trait_impls(&actual)
    );
}
