use crate::api::{Article, Comment};

/// Comments of `article` followed by `local`, sorted by date
///
/// The sort is stable: comments sharing a date keep the persisted comments
/// first, each group in its own order.
pub fn merged_comments(article: &Article, local: &[Comment]) -> Vec<Comment> {
    let mut res = article
        .comments
        .iter()
        .chain(local.iter())
        .cloned()
        .collect::<Vec<_>>();
    res.sort_by_key(|c| c.date);
    res
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::api::{ArticleId, Time};

    fn at(millis: i64) -> Time {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::milliseconds(millis)
    }

    fn comment(author: &str, millis: i64) -> Comment {
        Comment {
            author: String::from(author),
            text: format!("written at {millis}"),
            date: at(millis),
        }
    }

    fn article(comments: Vec<Comment>) -> Article {
        Article {
            id: ArticleId::from("a"),
            title: String::from("Title"),
            author: String::from("Author"),
            content: String::from("Content"),
            date: at(0),
            comments,
        }
    }

    #[test]
    fn interleaves_by_date() {
        let a = article(vec![comment("p", 2000), comment("p", 1000)]);
        let local = vec![comment("l", 1500)];
        let merged = merged_comments(&a, &local);
        assert_eq!(
            merged.iter().map(|c| c.date).collect::<Vec<_>>(),
            vec![at(1000), at(1500), at(2000)]
        );
    }

    #[test]
    fn both_empty() {
        assert!(merged_comments(&article(Vec::new()), &[]).is_empty());
    }

    #[test]
    fn ties_keep_persisted_first() {
        let a = article(vec![comment("p1", 10), comment("p2", 10)]);
        let local = vec![comment("l1", 10), comment("l2", 5)];
        let merged = merged_comments(&a, &local);
        assert_eq!(
            merged.iter().map(|c| &c.author as &str).collect::<Vec<_>>(),
            vec!["l2", "p1", "p2", "l1"]
        );
    }

    #[test]
    fn inputs_are_left_alone() {
        let a = article(vec![comment("p", 2), comment("p", 1)]);
        let local = vec![comment("l", 0)];
        let (a_before, local_before) = (a.clone(), local.clone());
        let _ = merged_comments(&a, &local);
        assert_eq!(a, a_before);
        assert_eq!(local, local_before);
    }

    #[test]
    fn output_is_sorted_and_stable() {
        bolero::check!()
            .with_type::<(Vec<u8>, Vec<u8>)>()
            .cloned()
            .for_each(|(persisted, local): (Vec<u8>, Vec<u8>)| {
                let persisted = persisted
                    .iter()
                    .enumerate()
                    .map(|(i, t)| comment(&format!("p{i}"), *t as i64))
                    .collect::<Vec<_>>();
                let local = local
                    .iter()
                    .enumerate()
                    .map(|(i, t)| comment(&format!("l{i}"), *t as i64))
                    .collect::<Vec<_>>();
                let merged = merged_comments(&article(persisted.clone()), &local);
                assert_eq!(merged.len(), persisted.len() + local.len());

                let mut resorted = merged.clone();
                resorted.sort_by_key(|c| c.date);
                assert_eq!(resorted, merged);

                // among equal dates, the concatenation order is preserved
                let position = |c: &Comment| {
                    persisted
                        .iter()
                        .chain(local.iter())
                        .position(|o| o.author == c.author)
                        .unwrap()
                };
                for w in merged.windows(2) {
                    if w[0].date == w[1].date {
                        assert!(position(&w[0]) < position(&w[1]));
                    }
                }
            })
    }
}
