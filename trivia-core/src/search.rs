//! Case-insensitive substring search over question text

use crate::Question;

/// Whether `text` contains `term`, ignoring case.
pub fn matches(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term`, in input order.
///
/// A blank term matches everything.
pub fn search<'a>(questions: &'a [Question], term: &str) -> Vec<&'a Question> {
    let term = term.trim();
    if term.is_empty() {
        return questions.iter().collect();
    }
    questions
        .iter()
        .filter(|q| matches(&q.question, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: i64, text: &str) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "x".into(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn matches_ignores_case() {
        assert!(matches("What is the Title of...", "title"));
        assert!(matches("title", "TITLE"));
        assert!(!matches("Heading", "title"));
    }

    #[test]
    fn search_preserves_order() {
        let questions = vec![
            q(1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"),
            q(2, "What boxer's original name is Cassius Clay?"),
            q(3, "What movie earned Tom Hanks his third straight Oscar nomination?"),
            q(4, "What was the title of the 1990 fantasy directed by Tim Burton?"),
        ];

        let ids: Vec<_> = search(&questions, "Title").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn blank_term_matches_all() {
        let questions = vec![q(1, "a"), q(2, "b")];
        assert_eq!(search(&questions, "").len(), 2);
        assert_eq!(search(&questions, "   ").len(), 2);
    }

    #[test]
    fn no_match_is_empty() {
        let questions = vec![q(1, "a"), q(2, "b")];
        assert!(search(&questions, "zzz").is_empty());
    }
}
