use std::rc::Rc;

use common_data::{distinct_companies, SearchResult};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableRowProps {
    pub trade_name: AttrValue,
    pub country: AttrValue,
}

#[function_component]
pub fn TableRow(props: &TableRowProps) -> Html {
    html! {
        <tr>
            <td>{&props.trade_name}</td>
            <td>{&props.country}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompanyTableProps {
    pub results: Rc<Vec<SearchResult>>,
}

/// Every company behind the current results, once.
#[function_component]
pub fn CompanyTable(props: &CompanyTableProps) -> Html {
    let companies = distinct_companies(&props.results);
    if companies.is_empty() {
        return html!(<div></div>);
    }

    let rows = companies.into_iter().map(|company| {
        html! {
            <TableRow
                key={company.trade_name.clone()}
                trade_name={company.trade_name.clone()}
                country={company.country.clone()}
            />
        }
    });

    html! {
        <table class="table company-table">
            <thead>
                <tr>
                    <td>{"trade_name"}</td>
                    <td>{"country"}</td>
                </tr>
            </thead>
            <tbody>
                { for rows }
            </tbody>
        </table>
    }
}
