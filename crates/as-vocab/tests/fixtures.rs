use as_codec::{ContextEntry, Document};
use as_vocab::{codec, Kind, ObjectOrLink};

// Each fixture is decoded, encoded back and compared against its
// canonicalized form. Decoding the encoded value must give back the same
// document.

// A reply with an embedded parent note, a Mention tag and a two-element `to`.
#[test]
fn test_canonicalize_note_reply() {
    let document = read_write(
        "test_resources/note_reply.json",
        "test_resources/note_reply_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::Object(note) = document.node else {
        panic!("expected an object");
    };
    assert_eq!(note.kind, Kind::Note);
    assert_eq!(note.properties.to.len(), 2);
    assert_eq!(note.properties.cc.len(), 1);
    assert_eq!(note.properties.tag[0].kind(), Some(Kind::Mention));
    assert_eq!(
        note.properties.in_reply_to[0].kind(),
        Some(Kind::Note)
    );
    assert_eq!(
        document.context,
        vec![ContextEntry::Iri("https://www.w3.org/ns/activitystreams".to_owned())]
    );
}

// An activity embedding its actor and object. The actor's icon is an Image
// whose url is a Link; unknown members are carried through untouched.
#[test]
fn test_canonicalize_create_activity() {
    let document = read_write(
        "test_resources/create_activity.json",
        "test_resources/create_activity_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::Activity(create) = document.node else {
        panic!("expected an activity");
    };
    assert_eq!(create.kind, Kind::Create);
    assert_eq!(create.activity.actor[0].kind(), Some(Kind::Person));
    assert_eq!(create.transitive.object[0].kind(), Some(Kind::Note));
    assert_eq!(document.context.len(), 2);

    let ObjectOrLink::Object(actor) = &create.activity.actor[0] else {
        panic!("expected an actor object");
    };
    assert_eq!(actor.properties.icon[0].kind(), Some(Kind::Image));
    assert!(actor.extensions.contains_key("preferredUsername"));
}

// Paged outbox mixing a bare IRI with embedded items.
#[test]
fn test_canonicalize_ordered_collection_page() {
    let document = read_write(
        "test_resources/ordered_collection_page.json",
        "test_resources/ordered_collection_page_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::OrderedCollectionPage(page) = document.node else {
        panic!("expected an ordered collection page");
    };
    let items = &page.ordered.ordered_items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_iri(), Some("https://social.example/activities/1"));
    assert_eq!(items[1].kind(), Some(Kind::Note));
    assert_eq!(items[2].kind(), Some(Kind::Like));
    assert_eq!(page.ordered_page.start_index, Some(0));
    assert_eq!(page.collection.total_items, Some(42));
    assert_eq!(
        page.page.part_of.as_ref().and_then(|part_of| part_of.as_iri()),
        Some("https://social.example/users/sally/outbox")
    );
}

#[test]
fn test_canonicalize_place() {
    let document = read_write(
        "test_resources/place.json",
        "test_resources/place_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::Place(place) = document.node else {
        panic!("expected a place");
    };
    assert_eq!(
        place.place.latitude.as_ref().and_then(|latitude| latitude.as_f64()),
        Some(36.75)
    );
    assert_eq!(place.place.units.as_deref(), Some("miles"));
    assert_eq!(
        place.properties.name_map.as_ref().map(|map| map.len()),
        Some(2)
    );
}

// `closed` holds a date-time here and is kept as written.
#[test]
fn test_canonicalize_question() {
    let document = read_write(
        "test_resources/question.json",
        "test_resources/question_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::Question(question) = document.node else {
        panic!("expected a question");
    };
    assert_eq!(question.question.one_of.len(), 2);
    assert_eq!(
        question.question.closed,
        Some(serde_json::json!("2016-05-10T00:00:00Z"))
    );
}

#[test]
fn test_canonicalize_tombstone() {
    let document = read_write(
        "test_resources/tombstone.json",
        "test_resources/tombstone_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::OrderedCollection(collection) = document.node else {
        panic!("expected an ordered collection");
    };
    let ObjectOrLink::Tombstone(tombstone) = &collection.ordered.ordered_items[1] else {
        panic!("expected a tombstone");
    };
    assert_eq!(tombstone.tombstone.former_type, vec!["Image".to_owned()]);
    assert_eq!(
        tombstone.tombstone.deleted.as_ref().map(|deleted| deleted.as_str()),
        Some("2016-03-17T00:00:00Z")
    );
}

// An extension type declared before a known one resolves to the known one
// and both declared types are written back.
#[test]
fn test_canonicalize_multiple_types() {
    let document = read_write(
        "test_resources/multiple_types.json",
        "test_resources/multiple_types_canonicalized.json",
    )
    .unwrap();

    let ObjectOrLink::Object(note) = document.node else {
        panic!("expected an object");
    };
    assert_eq!(note.kind, Kind::Note);
    assert_eq!(note.types, vec!["Recipe".to_owned(), "Note".to_owned()]);
    assert!(note.extensions.contains_key("recipeYield"));
}

// std::fs::read_to_string() expects the path from the package root.
fn read_write(
    raw_path: &str,
    canon_path: &str,
) -> Result<Document<ObjectOrLink>, Box<dyn std::error::Error>> {
    let codec = codec();

    let raw = std::fs::read_to_string(raw_path)?;
    let document: Document<ObjectOrLink> = codec.decode_str(&raw)?;

    let encoded = codec.encode_document(&document)?;
    let canonicalized = json_canon::to_string(&encoded)?;

    let expected = std::fs::read_to_string(canon_path)?;
    assert_eq!(expected, canonicalized);

    let decoded_again: Document<ObjectOrLink> = codec.decode_document(encoded)?;
    assert_eq!(document, decoded_again);

    Ok(document)
}
