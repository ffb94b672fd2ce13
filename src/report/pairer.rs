use crate::corpus::types::{Corpus, TestClass};
use crate::report::types::ConversionMapping;

/// Pair every Swift test class with at most one C# counterpart.
///
/// Matching runs in two passes per Swift class: exact name first, then
/// normalized name. A C# class is consumed by the first Swift class that
/// claims it, so every class from either corpus ends up in exactly one
/// mapping. Leftover C# classes become extra mappings in scan order.
pub fn pair_corpora(swift: &Corpus, csharp: &Corpus) -> Vec<ConversionMapping> {
    let mut consumed = vec![false; csharp.classes.len()];
    let mut mappings = Vec::with_capacity(swift.len() + csharp.len());

    for swift_class in &swift.classes {
        let matched = find_exact(&swift_class.name, &csharp.classes, &consumed)
            .or_else(|| find_normalized(&swift_class.name, &csharp.classes, &consumed));

        match matched {
            Some(idx) => {
                consumed[idx] = true;
                mappings.push(ConversionMapping::new(
                    Some(swift_class),
                    Some(&csharp.classes[idx]),
                ));
            }
            None => mappings.push(ConversionMapping::new(Some(swift_class), None)),
        }
    }

    for (idx, csharp_class) in csharp.classes.iter().enumerate() {
        if !consumed[idx] {
            mappings.push(ConversionMapping::new(None, Some(csharp_class)));
        }
    }

    mappings
}

fn find_exact(name: &str, classes: &[TestClass], consumed: &[bool]) -> Option<usize> {
    classes
        .iter()
        .enumerate()
        .find(|(idx, class)| !consumed[*idx] && class.name == name)
        .map(|(idx, _)| idx)
}

fn find_normalized(name: &str, classes: &[TestClass], consumed: &[bool]) -> Option<usize> {
    let target = normalize_class_name(name);
    classes
        .iter()
        .enumerate()
        .find(|(idx, class)| !consumed[*idx] && normalize_class_name(&class.name) == target)
        .map(|(idx, _)| idx)
}

/// Reduce a class name to its subject for fuzzy matching.
///
/// Lowercases, then strips "tests" before "test" so `AccountTests` and
/// `AccountTest` both normalize to `account`.
pub fn normalize_class_name(name: &str) -> String {
    name.to_lowercase().replace("tests", "").replace("test", "")
}
