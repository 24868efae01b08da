//! A basic example of declaring and resolving a construction.
use straightedge::{
    Appearance, Construction, Extent, RenderedCircle, RenderedLine, RenderedPoint, Renderer, Vec2,
};

/// Stands in for a real drawing surface: just prints what it's told to draw.
struct Console;

impl Renderer for Console {
    fn draw_point(&mut self, name: &str, point: &RenderedPoint) {
        println!("point  {name} at {}", point.position);
    }
    fn draw_line(&mut self, name: &str, line: &RenderedLine) {
        println!("line   {name} through {} and {}", line.point1, line.point2);
    }
    fn draw_circle(&mut self, name: &str, circle: &RenderedCircle) {
        println!(
            "circle {name} around {} radius {}",
            circle.center, circle.radius
        );
    }
}

fn main() {
    // The classical first proposition: an equilateral triangle on a base.
    // Only the two base corners are axioms; the apex is derived with the
    // compass alone.
    let mut c = Construction::new();
    c.add_point("a", Vec2::new(0.0, 0.0), Appearance::visible())
        .add_point("b", Vec2::new(4.0, 0.0), Appearance::visible())
        .add_circle("ca", "a", "b", Appearance::hidden())
        .add_circle("cb", "b", "a", Appearance::hidden())
        .add_intersection("apex", "ca", "cb", true, Appearance::visible())
        .add_line("base", "a", "b", Extent::Segment, Appearance::visible())
        .add_line("right", "b", "apex", Extent::Segment, Appearance::visible())
        .add_line("left", "apex", "a", Extent::Segment, Appearance::visible());

    if !c.warnings().is_empty() {
        for warning in c.warnings() {
            eprintln!("warning: {}", warning.content);
        }
        return;
    }

    // One frame of the host's draw loop.
    c.render(0.0, &mut Console);

    // Geometry can also be queried directly.
    let apex = c
        .position_of("apex")
        .expect("apex was registered")
        .expect("the circles overlap, so the apex exists");
    println!("the triangle's sides are {} long", apex.euclidean_distance(Vec2::new(0.0, 0.0)));
}
