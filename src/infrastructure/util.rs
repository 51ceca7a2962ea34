use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Parameterization via the `slug` crate: lowercase, non-alphanumeric
/// runs collapsed to single hyphens, leading/trailing hyphens stripped.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterizes_titles() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World"), "hello-world");
        assert_eq!(slugger.slugify("  Spaces -- and symbols!?  "), "spaces-and-symbols");
    }

    #[test]
    fn accented_titles_collapse_to_the_same_base() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Café!"), slugger.slugify("Cafe?"));
    }

    #[test]
    fn symbol_only_titles_produce_nothing() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("!!!"), "");
    }
}
