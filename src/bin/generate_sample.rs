/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let teams = ["KIA", "LG", "Doosan", "Samsung", "NC"];
    let surnames = ["Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Han"];
    let given = ["Minho", "Jiho", "Dohyun", "Seungmin", "Hyunwoo", "Jaeyoung"];

    let output_path = "sample_batting.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Name", "Team", "AVG", "HR", "OPS", "WAR"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for team in &teams {
        for i in 0..9 {
            let name = format!(
                "{} {}",
                surnames[(rng.next_u64() as usize) % surnames.len()],
                given[(rng.next_u64() as usize) % given.len()],
            );

            let avg = rng.gauss(0.275, 0.025).clamp(0.180, 0.360);
            let hr = rng.gauss(12.0, 9.0).round().max(0.0) as u32;
            let ops = (avg + rng.gauss(0.55, 0.08)).clamp(0.500, 1.150);
            let war = rng.gauss(1.8, 1.6).clamp(-1.0, 8.0);

            // Leave a little dirt in each team's roster so the cleaning
            // path has something to do: one blank AVG and one junk WAR.
            let avg_cell = if i == 7 {
                String::new()
            } else {
                format!("{avg:.3}")
            };
            let war_cell = if i == 8 {
                "n/a".to_string()
            } else {
                format!("{war:.2}")
            };

            writer
                .write_record(&[
                    name,
                    team.to_string(),
                    avg_cell,
                    hr.to_string(),
                    format!("{ops:.3}"),
                    war_cell,
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} player rows to {output_path}");
}
