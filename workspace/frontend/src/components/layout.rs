pub mod footer;
pub mod header;

use yew::prelude::*;

use footer::Footer;
use header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Header />
            <main class="container mx-auto w-full flex-1 p-6">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
