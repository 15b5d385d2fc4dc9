//! End-to-end merge tests driving the store through scripted interaction.
//!
//! The interactive collaborator is replaced by [`ScriptedPrompter`], so
//! these tests exercise the same prompt-backed resolver and confirmer the
//! binary uses, without a console.

use rolodex::{
    Address, ContactBook, MergeChoice, NewContact, PromptConfirmer, PromptResolver,
    ScriptedPrompter, StoreError,
};

fn book_with_pair() -> (ContactBook, rolodex::ContactId, rolodex::ContactId) {
    let mut book = ContactBook::new();
    let keep = book
        .insert(
            NewContact::new("Ada", "Lovelace", "402-555-1111")
                .email("ada@example.com")
                .notes("met at the salon"),
        )
        .unwrap();
    let absorb = book
        .insert(
            NewContact::new("Ada", "Lovelace", "531-555-2222")
                .email("ada@example.com")
                .notes("likes engines")
                .address(Address {
                    city: "London".to_string(),
                    ..Address::default()
                }),
        )
        .unwrap();
    (book, keep, absorb)
}

#[test]
fn scripted_merge_resolves_only_the_phone_conflict() {
    let (mut book, keep, absorb) = book_with_pair();

    // Only one conflicting field (phone), answered with "2".
    let mut resolver = PromptResolver::new(ScriptedPrompter::new(["2"]));
    let survivor = book.merge(&keep, &absorb, &mut resolver).unwrap();

    assert_eq!(survivor, keep);
    assert!(book.get(&absorb).is_none());
    assert_eq!(book.len(), 1);

    let merged = book.get(&keep).unwrap();
    // The shared email was taken without a prompt.
    assert_eq!(merged.email, "ada@example.com");
    assert_eq!(merged.phone, "531-555-2222");
    assert_eq!(merged.notes, "met at the salon | likes engines");
    assert_eq!(merged.address.city, "London");
}

#[test]
fn garbage_answers_reprompt_before_settling() {
    let (mut book, keep, absorb) = book_with_pair();

    let mut resolver = PromptResolver::new(ScriptedPrompter::new(["nope", "1"]));
    book.merge(&keep, &absorb, &mut resolver).unwrap();
    assert_eq!(book.get(&keep).unwrap().phone, "402-555-1111");
}

#[test]
fn an_exhausted_prompt_aborts_the_merge_without_changes() {
    let (mut book, keep, absorb) = book_with_pair();
    let before = book.clone();

    // Three useless answers exhaust the retry budget.
    let mut resolver = PromptResolver::new(ScriptedPrompter::new(["a", "b", "c"]));
    let err = book.merge(&keep, &absorb, &mut resolver).unwrap_err();

    assert_eq!(
        err,
        StoreError::MergeUnresolved {
            field: "phone".to_string()
        }
    );
    assert_eq!(book, before);
    assert!(book.contains(&keep) && book.contains(&absorb));
}

#[test]
fn closure_resolvers_work_without_any_prompting() {
    let (mut book, keep, absorb) = book_with_pair();

    let mut prefer_absorbed = |_: &str, _: &str, _: &str| Some(MergeChoice::Right);
    book.merge(&keep, &absorb, &mut prefer_absorbed).unwrap();
    assert_eq!(book.get(&keep).unwrap().phone, "531-555-2222");
}

#[test]
fn merge_then_delete_flow_over_scripted_prompts() {
    let (mut book, keep, absorb) = book_with_pair();

    let mut resolver = PromptResolver::new(ScriptedPrompter::new(["1"]));
    book.merge(&keep, &absorb, &mut resolver).unwrap();

    // Declining leaves the survivor in place; confirming removes it.
    let mut declining = PromptConfirmer::new(ScriptedPrompter::new(["no"]));
    assert!(matches!(
        book.delete(&keep, &mut declining),
        Err(StoreError::DeleteDeclined(_))
    ));
    assert!(book.contains(&keep));

    let mut confirming = PromptConfirmer::new(ScriptedPrompter::new(["yes"]));
    book.delete(&keep, &mut confirming).unwrap();
    assert!(book.is_empty());
}
