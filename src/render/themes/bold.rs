//! Bold theme
//!
//! Black and white, massive display typography, underlined section heads.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, join_present, paragraph_if};

const SECTION_HEAD: &str = "text-4xl font-black mb-8 underline decoration-4 underline-offset-8";

pub(crate) fn render(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("")
            .key(NodeKey::Entry(exp.id.0))
            .maybe(heading_if(4, "text-3xl font-black", &exp.role))
            .maybe(paragraph_if(
                "text-xl text-gray-400 mb-2",
                &join_present(&[&exp.company, &exp.duration], " // "),
            ))
            .maybe(paragraph_if("text-lg font-medium", &exp.description))
    });

    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span("border-4 border-white px-4 py-2 text-xl font-black", skill)
            .key(NodeKey::Index(i))
    });

    let projects = p.projects.iter().map(|proj| {
        Node::block("")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "text-3xl font-black", &proj.name))
            .maybe(paragraph_if(
                "text-xl text-gray-400 mb-2",
                &join_present(&proj.tags.iter().map(String::as_str).collect::<Vec<_>>(), " // "),
            ))
            .maybe(paragraph_if("text-lg font-medium", &proj.description))
    });

    Node::block("bg-black text-white min-h-full p-8 font-sans uppercase tracking-tighter")
        .child(
            Node::block("mb-12 border-b-8 border-white pb-8")
                .maybe(heading_if(
                    1,
                    "text-7xl md:text-9xl font-black mb-4 leading-none",
                    &p.full_name,
                ))
                .maybe(paragraph_if("text-2xl md:text-4xl font-bold text-gray-400", &p.title)),
        )
        .child(
            Node::block("grid grid-cols-1 md:grid-cols-2 gap-16")
                .child(
                    Node::block("")
                        .child(Node::heading(3, SECTION_HEAD, "About"))
                        .maybe(paragraph_if("text-xl font-medium leading-relaxed", &p.bio)),
                )
                .child(
                    Node::block("")
                        .child(Node::heading(3, SECTION_HEAD, "Contact"))
                        .child(
                            Node::block("text-xl font-medium space-y-2")
                                .maybe(paragraph_if("", &p.email))
                                .maybe(paragraph_if("", &p.phone))
                                .maybe(paragraph_if("", &p.location)),
                        ),
                ),
        )
        .child(
            Node::section("mt-16")
                .child(Node::heading(3, SECTION_HEAD, "Experience"))
                .child(Node::block("space-y-12").extend(experience)),
        )
        .child(
            Node::section("mt-16")
                .child(Node::heading(3, SECTION_HEAD, "Skills"))
                .child(Node::block("flex flex-wrap gap-4").extend(skills)),
        )
        .child(
            Node::section("mt-16")
                .child(Node::heading(3, SECTION_HEAD, "Projects"))
                .child(Node::block("space-y-12").extend(projects)),
        )
}
