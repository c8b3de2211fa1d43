use log::{error, info};
use serde::Serialize;
use shared::{
    CalendarCommand, CommandResponse, DateChangedRequest, DateChangedResponse, ResolveDateRequest,
    ResolveDateResponse, ResolveIndexRequest, ResolveIndexResponse, ResolveOffsetRequest,
    ScrollSettledRequest, ScrollSettledResponse, SelectionRequest, SelectionResponse,
    WindowRequest, WindowResponse,
};

use crate::backend::domain::date_math::today;
use crate::backend::domain::index_mapper::{
    entry_for_index, entry_for_offset, index_for_date, page_for_date,
};
use crate::backend::domain::models::CalendarDate;
use crate::backend::domain::WindowView;
use crate::backend::io::mappers::WindowMapper;
use crate::backend::AppState;

/// Generate a fresh window around the request's current date
fn fresh_window(state: &AppState, request: &WindowRequest) -> Result<WindowView, String> {
    let service = &state.calendar_service;
    let query = WindowMapper::to_query(request, service.config())
        .map_err(|e| format!("Invalid window request: {}", e))?;
    service
        .window(&query)
        .map_err(|e| format!("Failed to generate window: {}", e))
}

/// Rebuild the window the caller holds, which was generated for
/// `generated_for` rather than for the live current date
fn held_window(state: &AppState, request: &WindowRequest) -> Result<WindowView, String> {
    let service = &state.calendar_service;
    let query = WindowMapper::to_held_query(request, service.config())
        .map_err(|e| format!("Invalid window request: {}", e))?;
    service
        .window(&query)
        .map_err(|e| format!("Failed to generate window: {}", e))
}

fn window_to_dto(view: &WindowView, request: &WindowRequest) -> Result<WindowResponse, String> {
    let current = CalendarDate::from_key(&request.current).map_err(|e| e.to_string())?;
    Ok(WindowMapper::to_dto(
        view,
        current,
        today(),
        request.disabled_by_default,
    ))
}

/// Materialize the window for a request
pub fn get_window(state: &AppState, request: &WindowRequest) -> Result<WindowResponse, String> {
    info!("window - current {} mode {:?}", request.current, request.mode);
    let view = fresh_window(state, request)?;
    window_to_dto(&view, request)
}

/// Resolve a snapped day index back to its date
pub fn resolve_index(
    state: &AppState,
    request: &ResolveIndexRequest,
) -> Result<ResolveIndexResponse, String> {
    info!("resolve_index - index {}", request.index);
    let view = held_window(state, &request.window)?;
    let entry = entry_for_index(&view.sequence, request.index)
        .map_err(|e| format!("Failed to resolve index: {}", e))?;

    Ok(ResolveIndexResponse {
        date: entry.date.to_key(),
        is_padding: entry.is_padding,
    })
}

/// Resolve a raw scroll offset to the day under it
pub fn resolve_offset(
    state: &AppState,
    request: &ResolveOffsetRequest,
) -> Result<ResolveIndexResponse, String> {
    info!(
        "resolve_offset - offset {} item width {}",
        request.offset, request.item_width
    );
    let view = held_window(state, &request.window)?;
    let entry = entry_for_offset(&view.sequence, request.offset, request.item_width)
        .map_err(|e| format!("Failed to resolve offset: {}", e))?;

    Ok(ResolveIndexResponse {
        date: entry.date.to_key(),
        is_padding: entry.is_padding,
    })
}

/// Resolve a date to the position the list should scroll to
///
/// A date outside the min/max range is moved onto the bound it crossed and
/// the bound is reported back.
pub fn resolve_date(
    state: &AppState,
    request: &ResolveDateRequest,
) -> Result<ResolveDateResponse, String> {
    info!("resolve_date - date {}", request.date);
    let date = CalendarDate::from_key(&request.date).map_err(|e| e.to_string())?;
    let view = held_window(state, &request.window)?;
    let (resolved, boundary) = view.sequence.bounds().clamp(date);

    Ok(ResolveDateResponse {
        index: index_for_date(&view.sequence, resolved),
        page: page_for_date(&view.sequence, resolved),
        resolved: resolved.to_key(),
        boundary: boundary.map(WindowMapper::boundary_to_dto),
    })
}

/// Handle an external change of the current date
pub fn date_changed(
    state: &AppState,
    request: &DateChangedRequest,
) -> Result<DateChangedResponse, String> {
    info!(
        "date_changed - {} -> {} from {}",
        request.previous, request.window.current, request.source
    );
    let service = &state.calendar_service;

    let previous = CalendarDate::from_key(&request.previous).map_err(|e| e.to_string())?;
    let query = WindowMapper::to_query(&request.window, service.config())
        .map_err(|e| format!("Invalid window request: {}", e))?;
    let view = service
        .on_date_changed(previous, &query, request.source)
        .map_err(|e| format!("Failed to regenerate window: {}", e))?;

    Ok(DateChangedResponse {
        window: view
            .as_ref()
            .map(|view| window_to_dto(view, &request.window))
            .transpose()?,
    })
}

/// Handle a scroll gesture settling on a position of the held window
pub fn scroll_settled(
    state: &AppState,
    request: &ScrollSettledRequest,
) -> Result<ScrollSettledResponse, String> {
    info!("scroll_settled - page {}", request.page);
    let view = held_window(state, &request.window)?;
    let settled = state
        .calendar_service
        .on_scroll_settled(&view.sequence, request.page)
        .map_err(|e| format!("Failed to resolve scroll position: {}", e))?;

    Ok(ScrollSettledResponse {
        date: settled.date.to_key(),
        window: settled
            .recentered
            .as_ref()
            .map(|view| window_to_dto(view, &request.window))
            .transpose()?,
        boundary: settled.boundary.map(WindowMapper::boundary_to_dto),
    })
}

/// Marks with the current date selected
pub fn selection(state: &AppState, request: &SelectionRequest) -> Result<SelectionResponse, String> {
    let current = CalendarDate::from_key(&request.current).map_err(|e| e.to_string())?;
    Ok(SelectionResponse {
        marked_dates: state
            .calendar_service
            .marked_dates(current, &request.marked_dates),
    })
}

fn respond<T: Serialize>(result: Result<T, String>) -> CommandResponse {
    match result.and_then(|value| serde_json::to_value(value).map_err(|e| e.to_string())) {
        Ok(result) => CommandResponse::Ok { result },
        Err(message) => {
            error!("Command failed: {}", message);
            CommandResponse::Error { message }
        }
    }
}

/// Dispatch a single command from the UI layer
pub fn handle_command(state: &AppState, command: &CalendarCommand) -> CommandResponse {
    match command {
        CalendarCommand::Window(request) => respond(get_window(state, request)),
        CalendarCommand::ResolveIndex(request) => respond(resolve_index(state, request)),
        CalendarCommand::ResolveDate(request) => respond(resolve_date(state, request)),
        CalendarCommand::ResolveOffset(request) => respond(resolve_offset(state, request)),
        CalendarCommand::DateChanged(request) => respond(date_changed(state, request)),
        CalendarCommand::ScrollSettled(request) => respond(scroll_settled(state, request)),
        CalendarCommand::Selection(request) => respond(selection(state, request)),
    }
}
