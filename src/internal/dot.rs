//! The `dot` module contains the conversion from an NFA or a DFA to the graphviz dot format.
//! The output can be fed to the graphviz tools to obtain a graphical depiction of the automaton.

use std::io::Write;

use dot_writer::{Attributes, DotWriter, RankDirection};

use super::{DfaImpl, NfaImpl};

/// Render the NFA to the graphviz dot format.
/// The initial state is drawn in blue, final states in red.
pub(crate) fn nfa_render<W: Write>(nfa: &NfaImpl, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    for (index, state) in nfa.states.iter().enumerate() {
        let source_id = {
            let mut source_node = digraph.node_auto();
            source_node
                .set_label(nfa.registry.label((index as u32).into()))
                .set_shape(dot_writer::Shape::Circle);
            if index == nfa.initial.as_usize() {
                source_node
                    .set_color(dot_writer::Color::Blue)
                    .set_pen_width(3.0);
            }
            if nfa.is_final((index as u32).into()) {
                source_node
                    .set_color(dot_writer::Color::Red)
                    .set_pen_width(3.0);
            }
            source_node.id()
        };
        for (ch, target_state) in &state.transitions {
            digraph
                .edge(
                    source_id.clone(),
                    &format!("node_{}", target_state.as_usize()),
                )
                .attributes()
                .set_label(&ch.to_string());
        }
        for target_state in &state.epsilon_transitions {
            digraph
                .edge(
                    source_id.clone(),
                    &format!("node_{}", target_state.as_usize()),
                )
                .attributes()
                .set_label("ε");
        }
    }
}

/// Render a DFA to the graphviz dot format.
/// The nodes carry the canonical names of the composite states.
pub(crate) fn dfa_render<W: Write>(dfa: &DfaImpl, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    for state in &dfa.states {
        let mut source_node = digraph.node_auto();
        source_node
            .set_label(&state.name)
            .set_shape(dot_writer::Shape::Circle);
        if state.id == dfa.initial() {
            source_node
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if dfa.is_final(state.id) {
            source_node
                .set_color(dot_writer::Color::Red)
                .set_pen_width(3.0);
        }
    }
    for (source_id, targets) in &dfa.transitions {
        for (ch, target_id) in targets.iter() {
            digraph
                .edge(
                    &format!("node_{}", source_id.as_usize()),
                    &format!("node_{}", target_id.as_usize()),
                )
                .attributes()
                .set_label(&ch.to_string());
        }
    }
}
