use super::*;

struct Book {
    title: String,
    author: String,
}

struct BookTags;

impl TagExtractor<Book> for BookTags {
    fn tags(&self, item: &Book) -> Option<Vec<String>> {
        Some(vec![item.title.clone(), item.author.clone()])
    }
}

fn book() -> Book {
    Book {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
    }
}

#[test]
fn struct_extractor_yields_all_fields() {
    let tags = BookTags.tags(&book()).unwrap();
    assert_eq!(tags, vec!["Dune".to_string(), "Herbert".to_string()]);
}

#[test]
fn closure_is_an_extractor() {
    let extractor = |b: &Book| Some(vec![b.title.to_uppercase()]);
    assert_eq!(extractor.tags(&book()), Some(vec!["DUNE".to_string()]));
}

#[test]
fn extractor_works_on_unsized_items() {
    let extractor = |s: &str| Some(s.split(',').map(str::to_string).collect::<Vec<_>>());
    let tags = TagExtractor::<str>::tags(&extractor, "a,b").unwrap();
    assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn missing_tags_are_reported_as_none() {
    let extractor = |_: &Book| -> Option<Vec<String>> { None };
    assert!(extractor.tags(&book()).is_none());
}
