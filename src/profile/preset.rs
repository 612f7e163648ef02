use crate::{
    FoldToBase, LowerCase, RemoveDiacritics, Trim, process::Process, profile::Profile,
};

/// The canonical search key: lowercase, fold tabled letters, strip the
/// remaining accents, trim. Step order is fixed; the table is keyed on
/// lowercase letters.
pub fn search_key() -> Profile<impl Process> {
    Profile::builder("search_key")
        .add_stage(LowerCase)
        .add_stage(FoldToBase)
        .add_stage(RemoveDiacritics)
        .add_stage(Trim)
        .build()
}

/// Case-insensitive form that keeps every accent, for exact-diacritic
/// matching.
pub fn literal() -> Profile<impl Process> {
    Profile::builder("literal").add_stage(LowerCase).build()
}
