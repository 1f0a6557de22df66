use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, AttributeArgs, FnArg, Ident, ItemFn, Lit, Meta,
    NestedMeta, Pat, ReturnType, Signature, Type,
};

/// Keeps the annotated `fn` and adds a `<name>_curried()` constructor
/// returning a `curried::Curry` over dynamic `serde_json::Value` arguments.
///
/// Accepts `min_args = <non-negative integer>` and `unique_keys = <bool>`.
#[proc_macro_attribute]
pub fn curry(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as AttributeArgs);
    let parsed = parse_macro_input!(item as ItemFn);
    match parse_options(attr).and_then(|options| generate_curry(parsed, options)) {
        Ok(gen) => gen,
        Err(err) => err.to_compile_error(),
    }
    .into()
}

#[derive(Debug, Default)]
struct Options {
    min_args: Option<usize>,
    unique_keys: Option<bool>,
}

fn parse_options(attr: AttributeArgs) -> syn::Result<Options> {
    let mut options = Options::default();

    for nested in attr {
        let name_value = match nested {
            NestedMeta::Meta(Meta::NameValue(name_value)) => name_value,
            other => return Err(syn::Error::new(other.span(), EXPECTED_KEY_VALUE)),
        };

        if name_value.path.is_ident("min_args") {
            let count = match &name_value.lit {
                Lit::Int(int) => int
                    .base10_parse::<usize>()
                    .map_err(|_| syn::Error::new(int.span(), INVALID_MIN_ARGS))?,
                other => return Err(syn::Error::new(other.span(), INVALID_MIN_ARGS)),
            };
            if options.min_args.replace(count).is_some() {
                return Err(syn::Error::new(name_value.span(), DUPLICATE_OPTION));
            }
        } else if name_value.path.is_ident("unique_keys") {
            let unique = match &name_value.lit {
                Lit::Bool(unique) => unique.value,
                other => return Err(syn::Error::new(other.span(), INVALID_UNIQUE_KEYS)),
            };
            if options.unique_keys.replace(unique).is_some() {
                return Err(syn::Error::new(name_value.span(), DUPLICATE_OPTION));
            }
        } else {
            return Err(syn::Error::new(name_value.path.span(), UNKNOWN_OPTION));
        }
    }

    Ok(options)
}

fn generate_curry(parsed: ItemFn, options: Options) -> syn::Result<TokenStream2> {
    let ItemFn {
        vis: visibility,
        sig:
            Signature {
                asyncness,
                generics,
                output,
                ident: fn_name,
                inputs,
                ..
            },
        ..
    } = &parsed;

    if let Some(asyncness) = asyncness {
        return Err(syn::Error::new(asyncness.span(), NO_ASYNC));
    }
    if !generics.params.is_empty() {
        return Err(syn::Error::new(generics.span(), NO_GENERICS));
    }

    // Parameter names and types, in declaration order
    let (names, types): (Vec<Ident>, Vec<Type>) = inputs
        .iter()
        .map(|argument| match argument {
            FnArg::Receiver(receiver) => Err(syn::Error::new(receiver.span(), NO_SELF_RECEIVER)),
            FnArg::Typed(typed_argument) => match &*typed_argument.pat {
                Pat::Ident(pat) if pat.by_ref.is_none() && pat.subpat.is_none() => {
                    Ok((pat.ident.clone(), (*typed_argument.ty).clone()))
                }
                other => Err(syn::Error::new(other.span(), IDENTIFIER_PATTERNS_ONLY)),
            },
        })
        .collect::<syn::Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    let output = match output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => quote!(#ty),
    };

    let curried_name = format_ident!("{}_curried", fn_name);
    let name_literal = fn_name.to_string();
    let parameter_literals = names.iter().map(|name| name.to_string());
    let indices = 0..names.len();

    let mut options_tokens = quote!(::curried::CurryOptions::new());
    if let Some(min_args) = options.min_args {
        options_tokens =
            quote!(#options_tokens.with_min_args(::curried::MinArgs::new(#min_args)));
    }
    if let Some(unique_keys) = options.unique_keys {
        options_tokens = quote!(#options_tokens.with_unique_keys(#unique_keys));
    }

    Ok(quote! {
        #parsed

        #visibility fn #curried_name() -> ::curried::Curry<
            ::curried::Value,
            ::core::result::Result<#output, ::curried::BindError>,
        > {
            ::curried::Curry::with_options(
                |__curried_arguments: ::curried::Arguments<::curried::Value>|
                    -> ::core::result::Result<#output, ::curried::BindError>
                {
                    #[allow(unused_mut, unused_variables)]
                    let mut __curried_binder = ::curried::Binder::new(
                        #name_literal,
                        &[#(#parameter_literals),*],
                        __curried_arguments,
                    )?;
                    #(let #names: #types = __curried_binder.take(#indices)?;)*
                    ::core::result::Result::Ok(#fn_name(#(#names),*))
                },
                #options_tokens,
            )
        }
    })
}

const EXPECTED_KEY_VALUE: &str = "expected `min_args = <integer>` or `unique_keys = <bool>`";
const INVALID_MIN_ARGS: &str = "min_args must be a non-negative integer";
const INVALID_UNIQUE_KEYS: &str = "unique_keys must be `true` or `false`";
const UNKNOWN_OPTION: &str = "unknown option, expected `min_args` or `unique_keys`";
const DUPLICATE_OPTION: &str = "option given more than once";
const NO_ASYNC: &str = "Cannot curry an `async` function";
const NO_GENERICS: &str = "Cannot curry a generic function";
const NO_SELF_RECEIVER: &str = "Cannot curry a function with a `self` receiver";
const IDENTIFIER_PATTERNS_ONLY: &str = "Curried parameters must be plain identifiers";
