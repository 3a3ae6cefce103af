//! A user's saved-articles list.

use std::collections::BTreeSet;

use crate::domain::events::{DomainEvent, chronological};
use crate::domain::ids::{Doi, UserId};

/// Articles currently saved by `user`, most recently saved first.
#[must_use]
pub fn project_saved_article_dois(events: &[DomainEvent], user: &UserId) -> Vec<Doi> {
    let mut saved: Vec<Doi> = Vec::new();
    for event in chronological(events) {
        match event {
            DomainEvent::UserSavedArticle {
                user_id,
                article_doi,
                ..
            } if user_id == user => {
                if !saved.contains(article_doi) {
                    saved.push(article_doi.clone());
                }
            }
            DomainEvent::UserUnsavedArticle {
                user_id,
                article_doi,
                ..
            } if user_id == user => saved.retain(|existing| existing != article_doi),
            _ => {}
        }
    }
    saved.reverse();
    saved
}

/// Articles currently saved by `user`.
#[must_use]
pub fn project_saved_articles(events: &[DomainEvent], user: &UserId) -> BTreeSet<Doi> {
    project_saved_article_dois(events, user)
        .into_iter()
        .collect()
}

/// Whether `doi` is on `user`'s saved list.
#[must_use]
pub fn project_has_user_saved_article(events: &[DomainEvent], user: &UserId, doi: &Doi) -> bool {
    chronological(events)
        .into_iter()
        .fold(false, |saved, event| match event {
            DomainEvent::UserSavedArticle {
                user_id,
                article_doi,
                ..
            } if user_id == user && article_doi == doi => true,
            DomainEvent::UserUnsavedArticle {
                user_id,
                article_doi,
                ..
            } if user_id == user && article_doi == doi => false,
            _ => saved,
        })
}
