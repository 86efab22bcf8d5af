mod derived;
mod parsed;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse2;

use derived::Derived;
use parsed::Parsed;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let parsed = match parse2::<Parsed>(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    #[allow(clippy::let_and_return)]
    let tokens = Derived::new(parsed).into_token_stream();

    #[cfg(feature = "debug")]
    println!("\nderive(Properties):\n{tokens:#}\n");

    tokens
}
