use crate::view::{TodayView, ViewModel};

/// Prints the dashboard state to the console (CLI mode).
pub fn print_view(vm: &ViewModel) {
    println!("=== Camino de la Virgen — {} ===", vm.today);

    match &vm.today_state {
        TodayView::Handoff { giver, receiver } => {
            println!("Hoy hay cambio de custodia.");
            println!("  📤 Entrega: {} ({})", giver.name, giver.department);
            println!("  📥 Recibe:  {} ({})", receiver.name, receiver.department);
            println!("  Aviso entrega: {}", giver.whatsapp_link);
            println!("  Aviso recibe:  {}", receiver.whatsapp_link);
        }
        TodayView::FirstDay { receiver } => {
            println!("Hoy es el primer día de la lista; no hay registro de quién entrega.");
            println!("  📥 Recibe: {} ({})", receiver.name, receiver.department);
            println!("  Aviso: {}", receiver.whatsapp_link);
        }
        TodayView::NoHandoff { last_known_holder } => {
            println!("⏸️  Hoy no hay entregas programadas.");
            match last_known_holder {
                Some(holder) => println!(
                    "  📍 Última ubicación conocida ({}): {} ({})",
                    holder.since, holder.name, holder.department
                ),
                None => println!("  La lista aún no registra ninguna entrega pasada."),
            }
        }
    }

    if let Some(name) = &vm.selected_name {
        println!("\nTurnos de {}:", name);
        if vm.turns.is_empty() {
            println!("  (sin turnos en la lista)");
        }
        for turn in &vm.turns {
            match &turn.giver {
                Some(giver) => println!("  {} — recibe de {}", turn.date, giver),
                None => println!("  {} — primer turno de la lista", turn.date),
            }
            println!("    📅 {}", turn.calendar_link);
        }
    }
}
