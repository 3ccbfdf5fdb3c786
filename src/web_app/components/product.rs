// web_app/components/product.rs - Product table components
//
// Components for displaying products including:
// - ProductTable: Owns the view state and lays out the whole table view
// - SortableHeader: Column header cycling asc/desc/unsorted on click
// - ProductRow: One table row, with the description tooltip on hover
// - DescriptionTooltip: The tooltip element that follows the cursor

use leptos::html;
use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use super::search::{Pagination, SearchBox};
use crate::web_app::model::{Product, SortDirection, SortField};
use crate::web_app::state::tooltip::{place_tooltip, Point, Size, TooltipState};
use crate::web_app::state::{CatalogCommand, CatalogView};

/// Interactive product table: search box, sortable table and pagination.
///
/// Creates the `CatalogView` from the fetched products. Every control sends
/// its `CatalogCommand` through a single dispatch callback.
#[component]
pub fn ProductTable(
    /// Full product list as fetched
    products: Vec<Product>,
) -> impl IntoView {
    let catalog = RwSignal::new(CatalogView::new(products));
    let tooltip = RwSignal::new(TooltipState::default());
    let tooltip_ref = NodeRef::<html::Div>::new();

    let dispatch = Callback::new(move |command: CatalogCommand| {
        // Rows may be replaced under the cursor without a mouseleave
        tooltip.update(|t| t.hide());
        catalog.update(|c| {
            if let Err(e) = c.apply(command) {
                leptos::logging::warn!("Rejected table command: {}", e);
            }
        });
    });

    view! {
        <SearchBox catalog=catalog dispatch=dispatch />

        <table id="productTable" class="product-table">
            <thead>
                <tr>
                    <SortableHeader field=SortField::Id catalog=catalog dispatch=dispatch />
                    <th>"Image"</th>
                    <SortableHeader field=SortField::Title catalog=catalog dispatch=dispatch />
                    <SortableHeader field=SortField::Price catalog=catalog dispatch=dispatch />
                    <SortableHeader field=SortField::Category catalog=catalog dispatch=dispatch />
                </tr>
            </thead>
            <tbody id="productBody">
                <For
                    each=move || catalog.with(|c| c.page_items().cloned().collect::<Vec<_>>())
                    key=|p| p.id
                    children=move |product| {
                        view! {
                            <ProductRow
                                product=product
                                tooltip=tooltip
                                tooltip_ref=tooltip_ref
                            />
                        }
                    }
                />
            </tbody>
        </table>

        <Pagination catalog=catalog dispatch=dispatch />

        <DescriptionTooltip tooltip=tooltip tooltip_ref=tooltip_ref />
    }
}

/// Sortable column header
///
/// Carries the `asc`/`desc` class while it is the active sort column.
#[component]
pub fn SortableHeader(
    field: SortField,
    catalog: RwSignal<CatalogView>,
    dispatch: Callback<CatalogCommand>,
) -> impl IntoView {
    let direction = move || catalog.with(|c| c.direction_for(field));

    view! {
        <th
            class="sortable"
            class:asc=move || direction() == Some(SortDirection::Asc)
            class:desc=move || direction() == Some(SortDirection::Desc)
            data-sort=field.as_str()
            on:click=move |_| dispatch.run(CatalogCommand::Sort(field))
        >
            {field.label()}
        </th>
    }
}

/// One product row
#[component]
pub fn ProductRow(
    product: Product,
    /// Shared tooltip state
    tooltip: RwSignal<TooltipState>,
    /// Tooltip element, measured to keep it inside the viewport
    tooltip_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let description = product.description_text().to_string();
    let title = product.title.clone();
    let fallback_src = product.fallback_image_url();
    let image_src = RwSignal::new(product.thumbnail_url());

    let on_image_error = move |_| {
        // Only swap once, in case the fallback fails too
        if image_src.get_untracked() != fallback_src {
            image_src.set(fallback_src.clone());
        }
    };

    let on_enter = {
        let description = description.clone();
        move |ev: MouseEvent| {
            let cursor = cursor_point(&ev);
            let provisional = tooltip_position(cursor, tooltip_ref);
            tooltip.update(|t| t.show(description.clone(), provisional));
            // Measure again once the element holds the new text
            request_animation_frame(move || {
                let position = tooltip_position(cursor, tooltip_ref);
                tooltip.update(|t| t.move_to(position));
            });
        }
    };
    let on_move = move |ev: MouseEvent| {
        let position = tooltip_position(cursor_point(&ev), tooltip_ref);
        tooltip.update(|t| t.move_to(position));
    };
    let on_leave = move |_| tooltip.update(|t| t.hide());

    view! {
        <tr
            data-description=description
            on:mouseenter=on_enter
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <td>{product.id}</td>
            <td>
                <img
                    src=move || image_src.get()
                    alt=title.clone()
                    class="product-image"
                    referrerpolicy="no-referrer"
                    on:error=on_image_error
                />
            </td>
            <td>{title}</td>
            <td class="price">{product.price_display()}</td>
            <td>{product.category_name().to_string()}</td>
        </tr>
    }
}

/// Tooltip showing the hovered product's description
#[component]
pub fn DescriptionTooltip(
    tooltip: RwSignal<TooltipState>,
    tooltip_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div
            id="descriptionTooltip"
            class="description-tooltip"
            class:show=move || tooltip.with(|t| t.visible)
            style:left=move || format!("{}px", tooltip.with(|t| t.position.x))
            style:top=move || format!("{}px", tooltip.with(|t| t.position.y))
            node_ref=tooltip_ref
        >
            {move || tooltip.with(|t| t.text.clone())}
        </div>
    }
}

fn cursor_point(ev: &MouseEvent) -> Point {
    Point {
        x: f64::from(ev.client_x()),
        y: f64::from(ev.client_y()),
    }
}

fn tooltip_position(cursor: Point, tooltip_ref: NodeRef<html::Div>) -> Point {
    let tooltip_size = tooltip_ref
        .get_untracked()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            Size { width: rect.width(), height: rect.height() }
        })
        .unwrap_or_default();

    let win = window();
    let viewport = Size {
        width: win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(f64::INFINITY),
        height: win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(f64::INFINITY),
    };

    place_tooltip(cursor, tooltip_size, viewport)
}
