//! Elegant theme
//!
//! Serif two-panel layout: dark sidebar with an initial-letter avatar,
//! contact list, and skills; wide main column for prose sections.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, initial, paragraph_if, span_if};

const MAIN_HEAD: &str = "text-2xl font-serif text-stone-800 mb-6 pb-2 border-b-2 border-stone-200";
const SIDE_HEAD: &str = "text-white font-serif text-lg border-b border-stone-600 pb-2 mb-4";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-stone-100 min-h-full p-8 font-sans text-stone-800").child(
        Node::block("max-w-5xl mx-auto bg-white shadow-xl min-h-[1000px] flex flex-col md:flex-row")
            .child(sidebar(p))
            .child(main_column(p)),
    )
}

fn sidebar(p: &Profile) -> Node {
    let avatar = Node::block(
        "w-32 h-32 mx-auto md:mx-0 bg-stone-700 rounded-full mb-6 flex items-center justify-center text-4xl font-serif text-stone-400 border-4 border-stone-600",
    )
    .maybe(span_if("", &initial(&p.full_name)));

    let identity = Node::block("mb-12 text-center md:text-left")
        .child(avatar)
        .maybe(heading_if(
            1,
            "text-3xl font-serif text-white mb-2 leading-tight",
            &p.full_name,
        ))
        .maybe(paragraph_if("text-stone-400 uppercase tracking-widest text-sm", &p.title));

    let contact = Node::section("")
        .child(Node::heading(3, SIDE_HEAD, "Contact"))
        .child(
            Node::block("space-y-3 text-sm")
                .maybe(span_if("flex items-center", &p.email))
                .maybe(span_if("flex items-center", &p.phone))
                .maybe(span_if("flex items-center", &p.location))
                .maybe(span_if("flex items-center", &p.linkedin)),
        );

    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span("px-2 py-1 bg-stone-700 text-xs rounded text-stone-300", skill)
            .key(NodeKey::Index(i))
    });

    Node::block("w-full md:w-1/3 bg-stone-800 text-stone-300 p-8 flex flex-col")
        .child(identity)
        .child(
            Node::block("space-y-8 flex-grow").child(contact).child(
                Node::section("")
                    .child(Node::heading(3, SIDE_HEAD, "Skills"))
                    .child(Node::block("flex flex-wrap gap-2").extend(skills)),
            ),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("")
            .key(NodeKey::Entry(exp.id.0))
            .child(
                Node::block("flex justify-between items-baseline mb-1")
                    .maybe(heading_if(3, "text-xl font-bold text-stone-700", &exp.role))
                    .maybe(span_if("text-sm text-stone-500 italic", &exp.duration)),
            )
            .maybe(if exp.company.is_empty() {
                None
            } else {
                Some(Node::block("text-stone-600 font-medium mb-3").child(Node::span("", &exp.company)))
            })
            .maybe(paragraph_if("text-stone-600 leading-relaxed", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("text-xs font-bold text-stone-500 uppercase tracking-wider", tag)
                .key(NodeKey::Index(i))
        });
        Node::block("")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(3, "text-lg font-bold text-stone-700 mb-2", &proj.name))
            .maybe(paragraph_if("text-stone-600 mb-3", &proj.description))
            .child(Node::block("flex gap-2").extend(tags))
    });

    Node::block("w-full md:w-2/3 p-12")
        .child(
            Node::section("mb-12")
                .child(Node::heading(2, MAIN_HEAD, "Profile"))
                .maybe(paragraph_if(
                    "text-stone-600 leading-relaxed text-lg font-light",
                    &p.bio,
                )),
        )
        .child(
            Node::section("mb-12")
                .child(Node::heading(2, MAIN_HEAD, "Experience"))
                .child(Node::block("space-y-8").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(2, MAIN_HEAD, "Projects"))
                .child(Node::block("grid grid-cols-1 gap-8").extend(projects)),
        )
}
