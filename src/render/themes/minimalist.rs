//! Minimalist theme, the default variant
//!
//! Typography-focused single column. This is the one theme that decomposes
//! long-form descriptions into bullet lists; sections with no content are
//! suppressed entirely, heading included.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, join_present, sentence_bullets, separated_row, span_if};

const DIVIDER: &str = "w-full border-b-[0.5px] border-black my-2";
const SECTION_HEAD: &str = "font-bold text-base mb-1";

pub(crate) fn render(p: &Profile) -> Node {
    let mut root = Node::block(
        "bg-white text-black min-h-full p-[1.2cm] font-serif max-w-[210mm] mx-auto leading-tight text-sm",
    )
    .child(header(p))
    .child(Node::divider(DIVIDER));

    if !p.bio.is_empty() {
        root = root.child(
            Node::section("mb-2")
                .child(Node::heading(3, SECTION_HEAD, "Technical Summary"))
                .child(Node::paragraph("text-justify leading-snug", &p.bio))
                .child(Node::divider(DIVIDER)),
        );
    }

    if !p.skills.is_empty() {
        root = root.child(
            Node::section("mb-2")
                .child(Node::heading(3, SECTION_HEAD, "Skills"))
                .child(
                    Node::block("text-justify leading-snug")
                        .child(Node::span("font-bold", "Technologies: "))
                        .child(Node::span("", p.skills.join(", "))),
                )
                .child(Node::divider(DIVIDER)),
        );
    }

    if !p.experience.is_empty() {
        let entries = p.experience.iter().map(|exp| {
            Node::block("")
                .key(NodeKey::Entry(exp.id.0))
                .child(
                    Node::block("flex justify-between items-baseline")
                        .maybe(span_if("font-bold text-base", &exp.role))
                        .maybe(span_if(
                            "italic text-sm",
                            &join_present(&[&exp.company, &exp.duration], " | "),
                        )),
                )
                .child(bullet_list(&exp.description))
        });
        root = root.child(
            Node::section("mb-2")
                .child(Node::heading(3, SECTION_HEAD, "Experience"))
                .child(Node::block("space-y-3").extend(entries))
                .child(Node::divider(DIVIDER)),
        );
    }

    if !p.projects.is_empty() {
        let entries = p.projects.iter().map(|proj| {
            Node::block("")
                .key(NodeKey::Entry(proj.id.0))
                .child(
                    Node::block("flex justify-between items-baseline")
                        .maybe(span_if("font-bold text-base", &proj.name))
                        .maybe(span_if("italic text-sm", &proj.tags.join(", "))),
                )
                .child(bullet_list(&proj.description))
        });
        root = root.child(
            Node::section("mb-2")
                .child(Node::heading(3, SECTION_HEAD, "Selected Projects"))
                .child(Node::block("space-y-3").extend(entries)),
        );
    }

    root
}

fn header(p: &Profile) -> Node {
    let mut header = Node::block("text-center mb-2").maybe(heading_if(
        1,
        "text-3xl font-bold mb-1 uppercase tracking-wide",
        &p.full_name,
    ));

    header = header.child(separated_row(
        Node::block("flex justify-center items-center gap-2 text-sm mb-1"),
        "",
        "|",
        vec![
            span_if("", &p.location),
            span_if("", &p.phone),
            if p.email.is_empty() {
                None
            } else {
                Some(Node::link(
                    "hover:underline",
                    format!("mailto:{}", p.email),
                    &p.email,
                ))
            },
        ],
    ));

    header.child(separated_row(
        Node::block("flex justify-center items-center gap-2 text-sm"),
        "",
        "|",
        vec![
            if p.linkedin.is_empty() {
                None
            } else {
                Some(Node::link(
                    "hover:underline",
                    format!("https://{}", p.linkedin),
                    "LinkedIn",
                ))
            },
            if p.github.is_empty() {
                None
            } else {
                Some(Node::link(
                    "hover:underline",
                    format!("https://{}", p.github),
                    "GitHub",
                ))
            },
        ],
    ))
}

fn bullet_list(description: &str) -> Node {
    let items = sentence_bullets(description)
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| Node::item("pl-1", sentence).key(NodeKey::Index(i)));
    Node::list("list-disc list-outside ml-5 mt-1 space-y-0.5").extend(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Tag;
    use crate::profile::ExperienceEntry;

    #[test]
    fn test_empty_sections_suppressed() {
        let tree = render(&Profile::default());
        let headings: Vec<_> = {
            let mut out = Vec::new();
            tree.visit(&mut |n| {
                if matches!(n.tag, Tag::Heading(3)) {
                    out.push(n.text.clone().unwrap_or_default());
                }
            });
            out
        };
        assert!(headings.is_empty());
    }

    #[test]
    fn test_description_becomes_bullets() {
        let mut p = Profile::default();
        p.experience.push(ExperienceEntry {
            description: "Led the team. Shipped v2.\nImproved latency.".into(),
            ..ExperienceEntry::default()
        });
        let root = render(&p);
        let mut items = Vec::new();
        root.visit(&mut |n| {
            if n.tag == Tag::Item {
                items.push(n.text.clone().unwrap_or_default());
            }
        });
        assert_eq!(items, vec!["Led the team.", "Shipped v2.", "Improved latency."]);
    }
}
