//! Macros for dependency injection

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse_quote;

pub(super) mod attr;

/// Inherent method that shadows `tether::__private::InjectMethodsFallback`
const FORWARDER: &str = "__tether_inject_methods";

/// Expands a derive-macro for `Injectable`
pub(super) fn expand_injectable(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let syn::Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "`Injectable` can only be derived for structs"));
    };

    let fields = injection_fields(&data.fields)?;

    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for field in &fields {
            let ty = field.ty;
            where_clause.predicates.push(parse_quote!(#ty: ::tether::FromContainer));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let forwarder = format_ident!("{}", FORWARDER);
    let container = container_ident(!fields.is_empty());
    let assignments = fields.iter().map(|field| {
        let (member, ty) = (&field.member, field.ty);
        quote! {
            self.#member = <#ty as ::tether::FromContainer>::from_container(#container)?;
        }
    });

    Ok(quote! {
        impl #impl_generics ::tether::Injectable for #name #ty_generics #where_clause {
            // Resolves to the inherent method emitted by `#[inject_methods]` when the
            // type has one, otherwise to the no-op fallback.
            #[inline]
            fn inject_methods(&mut self, container: &::tether::Container) -> ::core::result::Result<(), ::tether::error::Error> {
                #[allow(unused_imports)]
                use ::tether::__private::InjectMethodsFallback as _;
                self.#forwarder(container)
            }

            #[inline]
            fn inject_fields(&mut self, #container: &::tether::Container) -> ::core::result::Result<(), ::tether::error::Error> {
                #(#assignments)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Expands an `impl` block into itself, a `MethodInjection` implementation
/// and the inherent forwarder picked up by the derived `Injectable`
pub(super) fn expand_inject_methods(input: &mut syn::ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(path, "`#[inject_methods]` expects an inherent impl block"));
    }

    let mut methods = Vec::new();
    for item in &mut input.items {
        let syn::ImplItem::Fn(method) = item else {
            continue;
        };
        if attr::take_inject_marker(&mut method.attrs)? {
            validate_signature(&method.sig)?;
            methods.push(method.sig.clone());
        }
    }

    let uses_container = methods
        .iter()
        .any(|sig| sig.inputs.iter().any(|arg| matches!(arg, syn::FnArg::Typed(_))));
    let container = container_ident(uses_container);
    let calls = methods.iter().map(|sig| {
        let ident = &sig.ident;
        let args = sig.inputs.iter().filter_map(|arg| match arg {
            syn::FnArg::Typed(pat) => {
                let ty = &pat.ty;
                Some(quote! { <#ty as ::tether::FromContainer>::from_container(#container)? })
            }
            syn::FnArg::Receiver(_) => None,
        });
        quote! {
            ::tether::InjectionOutput::into_result(self.#ident(#(#args),*))?;
        }
    });

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();
    let forwarder = format_ident!("{}", FORWARDER);

    Ok(quote! {
        #input

        impl #impl_generics ::tether::MethodInjection for #self_ty #where_clause {
            fn invoke_injection_methods(&mut self, #container: &::tether::Container) -> ::core::result::Result<(), ::tether::error::Error> {
                #(#calls)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics #self_ty #where_clause {
            #[doc(hidden)]
            #[allow(dead_code)]
            #[inline]
            pub(crate) fn #forwarder(&mut self, container: &::tether::Container) -> ::core::result::Result<(), ::tether::error::Error> {
                <Self as ::tether::MethodInjection>::invoke_injection_methods(self, container)
            }
        }
    })
}

struct InjectionField<'a> {
    member: syn::Member,
    ty: &'a syn::Type,
}

fn injection_fields(fields: &syn::Fields) -> syn::Result<Vec<InjectionField<'_>>> {
    let mut result = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !attr::has_inject_marker(&field.attrs)? {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(index)),
        };
        result.push(InjectionField { member, ty: &field.ty });
    }
    Ok(result)
}

fn validate_signature(sig: &syn::Signature) -> syn::Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "injection methods cannot be `async`"));
    }
    if sig.generics.type_params().next().is_some() || sig.generics.const_params().next().is_some() {
        return Err(syn::Error::new_spanned(&sig.generics, "injection methods cannot be generic over types"));
    }
    match sig.receiver() {
        Some(receiver) if receiver.reference.is_some() => Ok(()),
        Some(receiver) => Err(syn::Error::new_spanned(receiver, "injection methods must take `self` by reference")),
        None => Err(syn::Error::new_spanned(&sig.ident, "injection methods must have a `&self` or `&mut self` receiver")),
    }
}

#[inline]
fn container_ident(used: bool) -> syn::Ident {
    if used {
        format_ident!("container")
    } else {
        format_ident!("_container")
    }
}
