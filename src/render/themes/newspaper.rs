//! Newspaper theme
//!
//! Print-style masthead and multi-column body set in serif; skills run as
//! a single dotted line inside a boxed sidebar blurb.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, join_present, paragraph_if, span_if};

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-[#f0f0f0] text-black min-h-full p-8 font-serif").child(
        Node::block("max-w-4xl mx-auto bg-white p-12 shadow-lg")
            .child(masthead(p))
            .child(
                Node::block("columns-1 md:columns-2 gap-8 space-y-8 text-justify")
                    .child(editorial(p))
                    .child(work_history(p))
                    .child(projects(p))
                    .child(skills_box(p)),
            ),
    )
}

fn masthead(p: &Profile) -> Node {
    Node::block("text-center border-b-4 border-black pb-4 mb-4")
        .maybe(heading_if(
            1,
            "text-6xl font-black uppercase tracking-tight mb-2",
            &p.full_name,
        ))
        .child(
            Node::block(
                "flex justify-between items-center border-t border-b border-black py-2 text-sm font-bold uppercase",
            )
            .maybe(span_if("", &p.location))
            .maybe(span_if("", &p.title))
            .maybe(span_if("", &p.phone)),
        )
}

fn editorial(p: &Profile) -> Node {
    Node::section("break-inside-avoid")
        .child(Node::heading(3, "font-bold text-xl uppercase border-b-2 border-black mb-2", "Editorial"))
        .maybe(paragraph_if(
            "leading-snug first-letter:text-4xl first-letter:font-bold first-letter:float-left first-letter:mr-2",
            &p.bio,
        ))
}

fn work_history(p: &Profile) -> Node {
    let entries = p.experience.iter().map(|exp| {
        Node::block("mb-4")
            .key(NodeKey::Entry(exp.id.0))
            .maybe(heading_if(4, "font-bold text-lg leading-none", &exp.role))
            .maybe(paragraph_if(
                "italic text-sm mb-1",
                &join_present(&[&exp.company, &exp.duration], ", "),
            ))
            .maybe(paragraph_if("text-sm leading-snug", &exp.description))
    });

    Node::section("break-inside-avoid")
        .child(Node::heading(
            3,
            "font-bold text-xl uppercase border-b-2 border-black mb-2",
            "Work History",
        ))
        .extend(entries)
}

fn projects(p: &Profile) -> Node {
    let entries = p.projects.iter().map(|proj| {
        Node::block("mb-4")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "font-bold", &proj.name))
            .maybe(paragraph_if("text-sm", &proj.description))
    });

    Node::section("break-inside-avoid")
        .child(Node::heading(3, "font-bold text-xl uppercase border-b-2 border-black mb-2", "Projects"))
        .extend(entries)
}

fn skills_box(p: &Profile) -> Node {
    Node::section("break-inside-avoid bg-gray-100 p-4 border border-black")
        .child(Node::heading(3, "font-bold text-lg uppercase mb-2 text-center", "Skills & Tech"))
        .child(Node::paragraph(
            "text-center text-sm leading-relaxed",
            p.skills.join(" \u{2022} "),
        ))
}
