//! Swiss theme
//!
//! Modernist twelve-column grid, oversized name, red accent marks.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, paragraph_if};

const ACCENT_HEAD: &str = "text-sm font-bold uppercase tracking-widest mb-4 text-[#ff0000]";
const ACCENT_HEAD_WIDE: &str = "text-sm font-bold uppercase tracking-widest mb-6 text-[#ff0000]";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-white text-black min-h-full p-12 font-sans").child(
        Node::block("max-w-5xl mx-auto grid grid-cols-12 gap-8")
            .child(header(p))
            .child(left_rail(p))
            .child(main_column(p)),
    )
}

fn header(p: &Profile) -> Node {
    Node::block("col-span-12 mb-16")
        .maybe(heading_if(
            1,
            "text-8xl font-bold tracking-tighter leading-none mb-4",
            &p.full_name,
        ))
        .child(
            Node::block(
                "w-24 h-24 bg-[#ff0000] rounded-full flex items-center justify-center text-white font-bold text-xl mb-8",
            )
            .child(Node::span("", "CV")),
        )
        .maybe(paragraph_if("text-3xl font-bold text-gray-400", &p.title))
}

fn left_rail(p: &Profile) -> Node {
    let skills = p
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| Node::item("", skill).key(NodeKey::Index(i)));

    Node::block("col-span-4 space-y-12")
        .child(
            Node::section("")
                .child(Node::heading(3, ACCENT_HEAD, "Contact"))
                .maybe(paragraph_if("font-bold text-lg", &p.email))
                .maybe(paragraph_if("font-bold text-lg", &p.phone))
                .maybe(paragraph_if("font-bold text-lg", &p.location)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, ACCENT_HEAD, "Skills"))
                .child(Node::list("font-bold text-lg space-y-1").extend(skills)),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("grid grid-cols-3 gap-4")
            .key(NodeKey::Entry(exp.id.0))
            .child(
                Node::block("col-span-1 font-bold text-gray-400")
                    .maybe(if exp.duration.is_empty() {
                        None
                    } else {
                        Some(Node::span("", &exp.duration))
                    }),
            )
            .child(
                Node::block("col-span-2")
                    .maybe(heading_if(4, "text-xl font-bold mb-1", &exp.role))
                    .maybe(paragraph_if("text-lg font-medium mb-2", &exp.company))
                    .maybe(paragraph_if("text-gray-600 leading-snug", &exp.description)),
            )
    });

    let projects = p.projects.iter().map(|proj| {
        Node::block("grid grid-cols-3 gap-4")
            .key(NodeKey::Entry(proj.id.0))
            .child(
                Node::block("col-span-1 font-bold text-gray-400").maybe(if proj.tags.is_empty() {
                    None
                } else {
                    Some(Node::span("", proj.tags.join(", ")))
                }),
            )
            .child(
                Node::block("col-span-2")
                    .maybe(heading_if(4, "text-xl font-bold mb-1", &proj.name))
                    .maybe(paragraph_if("text-gray-600 leading-snug", &proj.description)),
            )
    });

    Node::block("col-span-8 space-y-16")
        .child(
            Node::section("")
                .child(Node::heading(3, ACCENT_HEAD_WIDE, "Profile"))
                .maybe(paragraph_if("text-2xl font-medium leading-tight", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, ACCENT_HEAD_WIDE, "Experience"))
                .child(Node::block("space-y-10").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, ACCENT_HEAD_WIDE, "Projects"))
                .child(Node::block("space-y-10").extend(projects)),
        )
}
