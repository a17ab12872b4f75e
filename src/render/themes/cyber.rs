//! Cyber theme
//!
//! Neon-on-black hacker aesthetic. Headings read like system namespaces
//! and list entries carry prompt-style prefixes.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::paragraph_if;

const CARD: &str = "border border-[#333] p-6 bg-[#111]";
const CARD_HEAD: &str = "text-2xl text-[#f0f] mb-4 border-b border-[#f0f] inline-block";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-black text-[#0ff] min-h-full p-8 font-mono relative overflow-hidden")
        .child(Node::block(
            "absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-[#f0f] to-[#0ff]",
        ))
        .child(
            Node::block("max-w-5xl mx-auto relative z-10")
                .child(header(p))
                .child(
                    Node::block("grid grid-cols-1 md:grid-cols-2 gap-8")
                        .child(
                            Node::block(CARD)
                                .child(Node::heading(3, CARD_HEAD, "SYSTEM.BIO"))
                                .maybe(paragraph_if("text-gray-300 leading-relaxed", &p.bio)),
                        )
                        .child(
                            Node::block(CARD)
                                .child(Node::heading(3, CARD_HEAD, "SYSTEM.SKILLS"))
                                .child(Node::block("flex flex-wrap gap-2").extend(skills(p))),
                        ),
                )
                .child(experience_card(p))
                .child(projects_card(p)),
        )
}

fn header(p: &Profile) -> Node {
    let mut header = Node::block(
        "mb-16 border border-[#0ff] p-8 bg-black/50 backdrop-blur-sm shadow-[0_0_20px_rgba(0,255,255,0.3)]",
    );
    if !p.full_name.is_empty() {
        header = header.child(Node::heading(
            1,
            "text-5xl md:text-7xl font-bold mb-2 text-transparent bg-clip-text bg-gradient-to-r from-[#f0f] to-[#0ff] animate-pulse",
            p.full_name.to_uppercase(),
        ));
    }
    if !p.title.is_empty() {
        header = header.child(Node::paragraph("text-xl text-[#f0f]", format!("> {}", p.title)));
    }
    header
}

fn skills(p: &Profile) -> impl Iterator<Item = Node> + '_ {
    p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "px-2 py-1 border border-[#0ff] text-[#0ff] text-xs hover:bg-[#0ff] hover:text-black transition-colors cursor-default",
            format!("[{skill}]"),
        )
        .key(NodeKey::Index(i))
    })
}

fn experience_card(p: &Profile) -> Node {
    let entries = p.experience.iter().map(|exp| {
        let mut head = Node::block("flex justify-between items-baseline text-[#0ff]");
        if !exp.role.is_empty() {
            head = head.child(Node::heading(
                4,
                "text-xl font-bold group-hover:text-[#f0f] transition-colors",
                format!("_ {}", exp.role),
            ));
        }
        if !exp.duration.is_empty() {
            head = head.child(Node::span("text-xs opacity-70", format!("[{}]", exp.duration)));
        }

        let mut entry = Node::block("group").key(NodeKey::Entry(exp.id.0)).child(head);
        if !exp.company.is_empty() {
            entry = entry.child(Node::paragraph(
                "text-gray-400 text-sm mb-1",
                format!("@ {}", exp.company),
            ));
        }
        entry.maybe(paragraph_if(
            "text-gray-300 text-sm pl-4 border-l border-[#333]",
            &exp.description,
        ))
    });

    Node::block("mt-8 border border-[#333] p-6 bg-[#111]")
        .child(Node::heading(3, CARD_HEAD, "EXEC.EXPERIENCE"))
        .child(Node::block("space-y-6").extend(entries))
}

fn projects_card(p: &Profile) -> Node {
    let entries = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("text-xs text-[#0ff] opacity-70", format!("[{tag}]")).key(NodeKey::Index(i))
        });
        let mut entry = Node::block("group").key(NodeKey::Entry(proj.id.0));
        if !proj.name.is_empty() {
            entry = entry.child(Node::heading(
                4,
                "text-xl font-bold text-[#0ff] group-hover:text-[#f0f] transition-colors",
                format!("_ {}", proj.name),
            ));
        }
        entry
            .maybe(paragraph_if(
                "text-gray-300 text-sm pl-4 border-l border-[#333]",
                &proj.description,
            ))
            .child(Node::block("flex flex-wrap gap-2 mt-1").extend(tags))
    });

    Node::block("mt-8 border border-[#333] p-6 bg-[#111]")
        .child(Node::heading(3, CARD_HEAD, "EXEC.PROJECTS"))
        .child(Node::block("space-y-6").extend(entries))
}
