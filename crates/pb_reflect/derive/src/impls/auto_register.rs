use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    // Invalid for generic types.
    if meta.is_generic() {
        return crate::utils::empty();
    }

    let pb_reflect_path = meta.pb_reflect_path();
    let auto_register_ = crate::path::auto_register_(pb_reflect_path);
    let type_registry_ = crate::path::type_registry_(pb_reflect_path);
    let ident = meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::AutoRegistration(#type_registry_::register::<#ident>)
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
