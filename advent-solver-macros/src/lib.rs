//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derive macro generating the `Solver` impl from `PartSolver<N>` impls
///
/// Takes the number of parts from the `#[puzzle_solver(parts = N)]`
/// attribute and generates a `Solver` impl whose `solve_part` dispatches
/// to `PartSolver<1>` through `PartSolver<N>`. Each part must have its own
/// `PartSolver` impl; a missing one is a compile error at the dispatch
/// site.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{PartSolver, PuzzleParser, PuzzleSolver};
///
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(parts = 2)]
/// struct Day1Solver;
///
/// // impl PuzzleParser for Day1Solver { ... }
/// // impl PartSolver<1> for Day1Solver { ... }
/// // impl PartSolver<2> for Day1Solver { ... }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .expect("PuzzleSolver derive macro requires #[puzzle_solver(...)] attribute");

    let mut parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(parts >= 1, "'parts' must be at least 1");

    let arms = (1..=parts).map(|n| {
        let lit = LitInt::new(&format!("{}u8", n), Span::call_site());
        quote! {
            #lit => <Self as ::advent_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> Result<String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::advent_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of a `SolverPlugin` so the solver is
/// discovered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g. 2021)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g. ["bingo"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it doesn't, the generated
/// trait bound check produces a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AutoRegisterSolver, PuzzleSolver};
///
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(year = 2021, day = 4, tags = ["bingo"])]
/// struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterSolver derive macro requires #[puzzle(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // for a clearer error than the inventory submission would give
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
