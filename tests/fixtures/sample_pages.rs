// Helper functions to build block lists for integration tests

use bio_page_builder::{BlockKind, BlockList, BlockPatch};
use ulid::Ulid;

/// A list with one block of every kind, all left at their defaults
pub fn create_every_kind() -> BlockList {
    let mut list = BlockList::new();
    for kind in BlockKind::ALL {
        list.add(kind);
    }
    list
}

/// A finished page: heading, bio, avatar, link, email, socials
pub fn create_complete_page() -> (BlockList, Vec<Ulid>) {
    let mut list = BlockList::new();

    let heading = list.add(BlockKind::Heading);
    list.update(heading, BlockPatch::content("Jane Doe"));

    let bio = list.add(BlockKind::Text);
    list.update(bio, BlockPatch::content("Rustacean and gardener."));

    let avatar = list.add(BlockKind::Image);
    list.update(avatar, BlockPatch::url("https://example.com/jane.png"));

    let link = list.add(BlockKind::Link);
    list.update(
        link,
        BlockPatch {
            content: Some("My blog".to_string()),
            url: Some("https://jane.example.com".to_string()),
            style: None,
        },
    );

    let email = list.add(BlockKind::Email);
    list.update(email, BlockPatch::content("jane@example.com"));

    let social = list.add(BlockKind::Social);

    (list, vec![heading, bio, avatar, link, email, social])
}
